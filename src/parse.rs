use crate::tools::strip_whitespace;
use crate::{Expr, Limits, Symbol, TruthError};
use pest::error::LineColLocation;
use pest::{iterators, Parser};

#[derive(Parser)]
#[grammar_inline = r####"
expr  = _{ SOI ~ disj ~ EOI }
disj  =  { conj ~ ( "+" ~ conj )* }
conj  =  { term ~ ( "&" ~ term )* }
term  = _{ neg | grp }
neg   =  { "~" ~ term }
grp   = _{ bt | bf | sym | "(" ~ disj ~ ")" }
bt    =  { "1" }
bf    =  { "0" }
sym   = @{ ASCII_ALPHA }
"####]
struct ExpressionParser;

/// Parse an expression tree after checking the length of the input and the number of symbols
pub(crate) fn parse_expression(s: &str, limits: &Limits) -> Result<Expr, TruthError> {
    limits.check_length(s)?;
    let s = strip_whitespace(s);

    let mut parsed = ExpressionParser::parse(Rule::expr, &s).map_err(|e| {
        let col = match e.line_col {
            LineColLocation::Pos((_, col)) => col,
            LineColLocation::Span((_, col), _) => col,
        };
        TruthError::malformed(format!("invalid syntax at column {} of '{}'", col, s))
    })?;
    let root = parsed
        .next()
        .ok_or_else(|| TruthError::malformed("empty expression"))?;
    let expr = load_expr(root)?;

    // Reject expressions using too many symbols
    crate::Rule::get_symbols(&expr, limits)?;
    Ok(expr)
}

fn load_expr(expr: iterators::Pair<Rule>) -> Result<Expr, TruthError> {
    let rule = expr.as_rule();
    match rule {
        Rule::bt => Ok(Expr::from(true)),
        Rule::bf => Ok(Expr::from(false)),
        Rule::sym => expr.as_str().parse::<Symbol>().map(Expr::from),
        _ => {
            let mut inner = expr.into_inner();
            let first = inner
                .next()
                .ok_or_else(|| TruthError::malformed("missing operand"))?;
            let mut expr = load_expr(first)?;
            match rule {
                Rule::neg => Ok(!expr),
                Rule::conj => {
                    for next in inner {
                        expr = expr & load_expr(next)?;
                    }
                    Ok(expr)
                }
                Rule::disj => {
                    for next in inner {
                        expr = expr | load_expr(next)?;
                    }
                    Ok(expr)
                }
                // Other rules are outside of scope or hidden
                _ => Err(TruthError::malformed(format!("unexpected {:?}", rule))),
            }
        }
    }
}
