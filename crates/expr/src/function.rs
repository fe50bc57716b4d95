use std::f64::consts::PI;

use evalexpr::{ContextWithMutableFunctions, EvalexprError, EvalexprResult, HashMapContext, Value};

/// Built-in math functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Log,
    Ln,
    Log10,
    Log2,
    Exp,
    Sqrt,
    Cbrt,
    Abs,
    Sign,
    Floor,
    Ceil,
    Round,
    Min,
    Max,
    Mod,
    Pow,
}

/// The number of arguments a [`Function`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    /// Returns true if `count` arguments are acceptable.
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }

    pub(crate) fn describe(self) -> String {
        match self {
            Arity::Exact(n) => n.to_string(),
            Arity::Range(min, max) => format!("{min} to {max}"),
            Arity::AtLeast(min) => format!("at least {min}"),
        }
    }
}

/// Names recognized as constants rather than variables.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(PI),
        "e" | "E" => Some(std::f64::consts::E),
        _ => None,
    }
}

impl Function {
    /// Every built-in function, in declaration order.
    pub const ALL: [Function; 29] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Atan2,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Asinh,
        Function::Acosh,
        Function::Atanh,
        Function::Log,
        Function::Ln,
        Function::Log10,
        Function::Log2,
        Function::Exp,
        Function::Sqrt,
        Function::Cbrt,
        Function::Abs,
        Function::Sign,
        Function::Floor,
        Function::Ceil,
        Function::Round,
        Function::Min,
        Function::Max,
        Function::Mod,
        Function::Pow,
    ];

    /// Looks up a function by its source name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Returns the source name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Atan2 => "atan2",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Asinh => "asinh",
            Function::Acosh => "acosh",
            Function::Atanh => "atanh",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Log10 => "log10",
            Function::Log2 => "log2",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Cbrt => "cbrt",
            Function::Abs => "abs",
            Function::Sign => "sign",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Round => "round",
            Function::Min => "min",
            Function::Max => "max",
            Function::Mod => "mod",
            Function::Pow => "pow",
        }
    }

    /// Returns the accepted argument count.
    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Function::Atan2 | Function::Mod | Function::Pow => Arity::Exact(2),
            Function::Log | Function::Round => Arity::Range(1, 2),
            Function::Min | Function::Max => Arity::AtLeast(1),
            _ => Arity::Exact(1),
        }
    }

    /// Applies the function to already-evaluated arguments.
    ///
    /// The argument count should satisfy [`arity`](Self::arity); missing
    /// arguments read as NaN. Domain errors yield NaN or an infinity rather
    /// than an error.
    #[must_use]
    pub fn apply(self, args: &[f64]) -> f64 {
        let x = args.first().copied().unwrap_or(f64::NAN);
        let y = args.get(1).copied();
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Atan2 => x.atan2(y.unwrap_or(f64::NAN)),
            Function::Sinh => x.sinh(),
            Function::Cosh => x.cosh(),
            Function::Tanh => x.tanh(),
            Function::Asinh => x.asinh(),
            Function::Acosh => x.acosh(),
            Function::Atanh => x.atanh(),
            Function::Log => match y {
                Some(base) => x.ln() / base.ln(),
                None => x.ln(),
            },
            Function::Ln => x.ln(),
            Function::Log10 => x.log10(),
            Function::Log2 => x.log2(),
            Function::Exp => x.exp(),
            Function::Sqrt => x.sqrt(),
            Function::Cbrt => x.cbrt(),
            Function::Abs => x.abs(),
            Function::Sign => sign(x),
            Function::Floor => x.floor(),
            Function::Ceil => x.ceil(),
            Function::Round => match y {
                Some(digits) => round_to(x, digits),
                None => x.round(),
            },
            Function::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
            Function::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Function::Mod => floored_mod(x, y.unwrap_or(f64::NAN)),
            Function::Pow => x.powf(y.unwrap_or(f64::NAN)),
        }
    }

    /// Registers this function in an `evalexpr` context under its name.
    pub(crate) fn register(self, context: &mut HashMapContext) -> EvalexprResult<()> {
        context.set_function(
            self.name().to_string(),
            evalexpr::Function::new(move |argument: &Value| self.call(argument)),
        )
    }

    /// Calls the function on an `evalexpr` argument: a single number, or a
    /// tuple of numbers for more than one argument.
    fn call(self, argument: &Value) -> EvalexprResult<Value> {
        let args = match argument {
            Value::Tuple(items) => items
                .iter()
                .map(Value::as_number)
                .collect::<EvalexprResult<Vec<f64>>>()?,
            value => vec![value.as_number()?],
        };
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(EvalexprError::CustomMessage(format!(
                "`{}` expects {} argument(s), found {}",
                self.name(),
                arity.describe(),
                args.len()
            )));
        }
        Ok(Value::Float(self.apply(&args)))
    }
}

/// Sign of `x`, with `sign(0) = 0` and NaN propagated.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Modulo whose result takes the sign of the divisor.
fn floored_mod(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return x;
    }
    x - y * (x / y).floor()
}

/// Rounds `x` to a whole number of decimal places.
fn round_to(x: f64, digits: f64) -> f64 {
    if digits.fract() != 0.0 || digits < 0.0 {
        return f64::NAN;
    }
    let factor = 10f64.powf(digits);
    (x * factor).round() / factor
}
