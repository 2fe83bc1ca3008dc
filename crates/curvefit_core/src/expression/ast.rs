//! Expression tree and its evaluation.

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm, spelled `log` or `ln`
    Ln,
    Sqrt,
    Abs,
}

impl Function {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "exp" => Some(Self::Exp),
            "log" | "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    fn apply(self, v: f64) -> f64 {
        match self {
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Exp => v.exp(),
            Self::Ln => v.ln(),
            Self::Sqrt => v.sqrt(),
            Self::Abs => v.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Variable,
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        function: Function,
        arg: Box<Node>,
    },
}

impl Node {
    pub(crate) fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Node::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluate with the variable bound to `x`. IEEE semantics throughout:
    /// division by zero gives ±inf, `sqrt(-1)` and `ln(-1)` give NaN.
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Number(v) => *v,
            Node::Variable => x,
            Node::Neg(inner) => -inner.eval(x),
            Node::Binary { op, lhs, rhs } => {
                let (a, b) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                }
            }
            Node::Call { function, arg } => function.apply(arg.eval(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names() {
        assert_eq!(Function::from_name("log"), Some(Function::Ln));
        assert_eq!(Function::from_name("ln"), Some(Function::Ln));
        assert_eq!(Function::from_name("cosh"), None);
    }

    #[test]
    fn test_eval_tree() {
        // 3 * x - 1
        let tree = Node::binary(
            BinaryOp::Sub,
            Node::binary(BinaryOp::Mul, Node::Number(3.0), Node::Variable),
            Node::Number(1.0),
        );
        assert_eq!(tree.eval(2.0), 5.0);
    }

    #[test]
    fn test_ieee_semantics() {
        let sqrt = Node::Call {
            function: Function::Sqrt,
            arg: Box::new(Node::Number(-1.0)),
        };
        assert!(sqrt.eval(0.0).is_nan());

        let div = Node::binary(BinaryOp::Div, Node::Number(1.0), Node::Variable);
        assert_eq!(div.eval(0.0), f64::INFINITY);
    }
}
