use crate::interpreter::value::core::Value;

/// An abstract syntax tree (AST) node of an expression.
///
/// The tree is built bottom-up by the parser. Each node owns its children
/// outright, and the whole tree is dropped once the root has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Number(Value),
    /// A binary operation such as `a + b`.
    Operator {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A function application, including the prefix `-` and postfix `!`.
    Function {
        /// Which function is applied.
        function: Function,
        /// The argument expressions, one to four of them (none for an empty
        /// matrix constructor).
        operands: Vec<Self>,
    },
}

impl Node {
    /// Builds a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use vecalc::ast::{Node, Operator};
    ///
    /// let node = Node::binary(Operator::Add, Node::from(1.0), Node::from(2.0));
    ///
    /// assert!(matches!(node, Node::Operator { op: Operator::Add, .. }));
    /// ```
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a function application node.
    #[must_use]
    pub const fn call(function: Function, operands: Vec<Self>) -> Self {
        Self::Function { function, operands }
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Number(Value::Scalar(value))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::Number(value)
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Specifies how many arguments a function takes.
///
/// - `Exact(n)` means the call must supply exactly `n` arguments.
/// - `OneOf(slice)` means the call may supply any count listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of these argument counts.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
        }
    }

    /// Largest argument count this arity accepts.
    #[must_use]
    pub fn max(&self) -> usize {
        match self {
            Self::Exact(m) => *m,
            Self::OneOf(counts) => counts.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Declares the function identities together with their keyword and arity.
///
/// The macro produces the `Function` enum, its `KEYWORDS` lookup table and
/// the `name`/`arity` accessors, so a function is described in exactly one
/// place.
macro_rules! functions {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident => { name: $name:literal, arity: $arity:expr $(, keyword: $keyword:literal)? }
        ),* $(,)?
    ) => {
        /// Identity of a builtin function.
        ///
        /// Keyword functions are recognized by the lexer. `Negate` and
        /// `Factorial` have no keyword; the parser creates them for prefix `-`
        /// and postfix `!`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        /// Every keyword the lexer resolves to a function, with its identity.
        pub const KEYWORDS: &[(&str, Function)] = &[
            $($( ($keyword, Function::$variant), )?)*
        ];

        impl Function {
            /// Returns the display name of the function.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns how many arguments a call to this function takes.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }
        }
    };
}

functions! {
    /// Degrees to radians.
    Rad          => { name: "rad", arity: Arity::Exact(1), keyword: "rad" },
    /// Radians to degrees.
    Deg          => { name: "deg", arity: Arity::Exact(1), keyword: "deg" },
    Sin          => { name: "sin", arity: Arity::Exact(1), keyword: "sin" },
    Cos          => { name: "cos", arity: Arity::Exact(1), keyword: "cos" },
    Tan          => { name: "tan", arity: Arity::Exact(1), keyword: "tan" },
    Asin         => { name: "asin", arity: Arity::Exact(1), keyword: "asin" },
    Acos         => { name: "acos", arity: Arity::Exact(1), keyword: "acos" },
    Atan         => { name: "atan", arity: Arity::Exact(1), keyword: "atan" },
    Sinh         => { name: "sinh", arity: Arity::Exact(1), keyword: "sinh" },
    Cosh         => { name: "cosh", arity: Arity::Exact(1), keyword: "cosh" },
    Tanh         => { name: "tanh", arity: Arity::Exact(1), keyword: "tanh" },
    Abs          => { name: "abs", arity: Arity::Exact(1), keyword: "abs" },
    /// Natural logarithm.
    Ln           => { name: "ln", arity: Arity::Exact(1), keyword: "ln" },
    /// Base 10 logarithm.
    Log          => { name: "log", arity: Arity::Exact(1), keyword: "log" },
    Exp          => { name: "exp", arity: Arity::Exact(1), keyword: "exp" },
    Sqrt         => { name: "sqrt", arity: Arity::Exact(1), keyword: "sqrt" },
    Vec2         => { name: "vec2", arity: Arity::Exact(2), keyword: "vec2" },
    Vec3         => { name: "vec3", arity: Arity::Exact(3), keyword: "vec3" },
    Vec4         => { name: "vec4", arity: Arity::Exact(4), keyword: "vec4" },
    Length       => { name: "length", arity: Arity::Exact(1), keyword: "length" },
    Normalize    => { name: "normalize", arity: Arity::Exact(1), keyword: "normalize" },
    Dot          => { name: "dot", arity: Arity::Exact(2), keyword: "dot" },
    Cross        => { name: "cross", arity: Arity::Exact(2), keyword: "cross" },
    /// Linear interpolation between two values.
    Mix          => { name: "mix", arity: Arity::Exact(3), keyword: "mix" },
    Mat2         => { name: "mat2", arity: Arity::OneOf(&[0, 1]), keyword: "mat2" },
    Mat3         => { name: "mat3", arity: Arity::OneOf(&[0, 1]), keyword: "mat3" },
    Mat4         => { name: "mat4", arity: Arity::OneOf(&[0, 1]), keyword: "mat4" },
    Scale        => { name: "scale", arity: Arity::Exact(2), keyword: "scale" },
    Rotate       => { name: "rotate", arity: Arity::Exact(3), keyword: "rotate" },
    Translate    => { name: "translate", arity: Arity::Exact(2), keyword: "translate" },
    /// Inverse of the transpose, as used for normal matrices.
    InvTranspose => { name: "invtranspose", arity: Arity::Exact(1), keyword: "invtranspose" },
    Perspective  => { name: "perspective", arity: Arity::Exact(4), keyword: "perspective" },
    Ortho        => { name: "ortho", arity: Arity::Exact(4), keyword: "ortho" },
    /// Uniform random integer below the argument.
    Rand         => { name: "rand", arity: Arity::Exact(1), keyword: "rand" },
    /// Prefix `-`.
    Negate       => { name: "-", arity: Arity::Exact(1) },
    /// Postfix `!`.
    Factorial    => { name: "!", arity: Arity::Exact(1) },
}

impl Function {
    /// Looks up a keyword function by its exact, case-sensitive name.
    ///
    /// ## Example
    /// ```
    /// use vecalc::ast::Function;
    ///
    /// assert_eq!(Function::from_keyword("dot"), Some(Function::Dot));
    /// assert_eq!(Function::from_keyword("Dot"), None);
    /// assert_eq!(Function::from_keyword("!"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(name: &str) -> Option<Self> {
        KEYWORDS.iter()
                .find(|(keyword, _)| *keyword == name)
                .map(|(_, function)| *function)
    }

    /// Returns the vector size built by a `vecN` constructor.
    #[must_use]
    pub const fn vector_dims(self) -> Option<usize> {
        match self {
            Self::Vec2 => Some(2),
            Self::Vec3 => Some(3),
            Self::Vec4 => Some(4),
            _ => None,
        }
    }

    /// Returns the matrix size built by a `matN` constructor.
    #[must_use]
    pub const fn matrix_dims(self) -> Option<usize> {
        match self {
            Self::Mat2 => Some(2),
            Self::Mat3 => Some(3),
            Self::Mat4 => Some(4),
            _ => None,
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
