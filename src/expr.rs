//! Boolean rules defined as expression trees

use core::ops::BitAnd;
use core::ops::BitOr;
use core::ops::Not;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{parse, Limits, Rule, Symbol, SymbolTable, TruthError};

/// A Boolean expression tree.
///
/// Represents a Boolean rule as a tree where internal nodes are AND or OR operations
/// and leaves are symbols (or fixed Boolean values). Each node carries a flag: a node with
/// a ```false``` flag is negated.
///
/// Expressions can not be [copied](Copy) but they can be [cloned](Clone) in constant time.
///
/// # Parsing expressions
///
/// An expression can be parsed from a string where
/// ```+```, ```&``` and ```~``` denote the ```OR```, ```AND``` and ```NOT``` Boolean operators,
/// parentheses group sub-expressions and variables are single letters.
/// ```NOT``` binds tighter than ```AND``` which binds tighter than ```OR```.
///
/// ```
/// use truthtable::{Expr, Rule, SymbolTable};
/// # use truthtable::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let expr: Expr = "A + B & ~C".parse()?;
/// assert_eq!(expr.to_string(), "A+B&~C");
///
/// let mut symbols = SymbolTable::discover("ABC")?;
/// symbols.assign_bits("010");
/// assert!(expr.eval(&symbols)?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub(crate) value: bool,
    pub(crate) node: ExprNode,
}

/// A node in an expression tree
#[derive(Clone, PartialEq, Debug)]
pub enum ExprNode {
    /// A fixed Boolean value
    True,

    /// A single variable
    Symbol(Symbol),

    /// Two expressions connected with a binary operator
    Operation(Operator, Arc<(Expr, Expr)>),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Expression trees can use the AND and OR operators.
pub enum Operator {
    /// AND operator: both children need to be true
    And,
    /// OR operator: at least one child needs to be true
    Or,
}

impl Expr {
    fn new(value: bool, node: ExprNode) -> Self {
        Self { value, node }
    }

    /// Parse an expression, rejecting it if it exceeds the given limits
    pub fn parse_with_limits(s: &str, limits: &Limits) -> Result<Self, TruthError> {
        parse::parse_expression(s, limits)
    }

    /// Get access to the inner content: a boolean value and an expression node
    pub fn get_inner(&self) -> (bool, &ExprNode) {
        (self.value, &self.node)
    }

    fn _fmt_expr(&self, f: &mut fmt::Formatter, parent: Option<Operator>) -> fmt::Result {
        match &self.node {
            ExprNode::True => write!(f, "{}", self.value as u8),
            ExprNode::Symbol(s) => match self.value {
                true => write!(f, "{}", s),
                false => write!(f, "~{}", s),
            },
            ExprNode::Operation(o, c) => {
                let grouped = !self.value || parent.map_or(false, |p| p.priority() > o.priority());
                if !self.value {
                    write!(f, "~")?;
                }
                if grouped {
                    write!(f, "(")?;
                }
                c.0._fmt_expr(f, Some(*o))?;
                write!(f, "{}", o)?;
                c.1._fmt_expr(f, Some(*o))?;
                if grouped {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl Operator {
    /// Define the priority of operators
    ///
    /// This priority controls the addition of necessary parenthesis when formatting expressions.
    pub fn priority(self) -> u8 {
        match self {
            Operator::And => 2,
            Operator::Or => 1,
        }
    }

    /// The character denoting this operator in expressions
    pub fn symbol(self) -> char {
        match self {
            Operator::And => '&',
            Operator::Or => '+',
        }
    }

    /// Combine two Boolean values
    pub fn apply(self, b1: bool, b2: bool) -> bool {
        match self {
            Operator::And => b1 && b2,
            Operator::Or => b1 || b2,
        }
    }

    fn join(self, e1: impl Into<Expr>, e2: impl Into<Expr>) -> Expr {
        Expr::from(ExprNode::Operation(self, Arc::new((e1.into(), e2.into()))))
    }
}

impl FromStr for Expr {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_expression(s, &Limits::default())
    }
}

impl From<ExprNode> for Expr {
    fn from(node: ExprNode) -> Self {
        Self::new(true, node)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Self::new(b, ExprNode::True)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Self::from(ExprNode::Symbol(s))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Rule for Expr {
    /// Evaluate both children of each operation: every symbol must have a value,
    /// even when the result is already decided.
    fn eval(&self, symbols: &SymbolTable) -> Result<bool, TruthError> {
        let b = match &self.node {
            ExprNode::True => true,
            ExprNode::Symbol(s) => symbols.value_of(s.as_char())?,
            ExprNode::Operation(op, children) => {
                op.apply(children.0.eval(symbols)?, children.1.eval(symbols)?)
            }
        };
        Ok(self.value == b)
    }

    fn collect_symbols(&self, symbols: &mut SymbolTable) -> Result<(), TruthError> {
        match &self.node {
            ExprNode::True => Ok(()),
            ExprNode::Symbol(s) => symbols.insert(*s).map(|_| ()),
            ExprNode::Operation(_, children) => {
                children.0.collect_symbols(symbols)?;
                children.1.collect_symbols(symbols)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self._fmt_expr(f, None)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self::new(!self.value, self.node)
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Operator::And.join(self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Self;
    fn bitor(self, rhs: T) -> Self::Output {
        Operator::Or.join(self, rhs)
    }
}
