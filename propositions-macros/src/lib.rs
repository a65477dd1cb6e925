use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for propositional formulas
enum Prop {
    Variable(Ident),
    StringLiteral(syn::LitStr),
    Not(Box<Prop>),
    And(Box<Prop>, Box<Prop>),
    Or(Box<Prop>, Box<Prop>),
    Implies(Box<Prop>, Box<Prop>),
}

impl Prop {
    /// Generate code for this formula using references
    ///
    /// Identifiers are borrowed; the builder methods on `Formula` take `&self`
    /// and share the operands, so the macro never moves a caller's value.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Prop::Variable(ident) => quote! {
                #ident
            },
            Prop::StringLiteral(lit) => quote! {
                ::propositions::Formula::variable(#lit)
            },
            Prop::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    ::propositions::Formula::not(&(#inner_tokens))
                }
            }
            Prop::And(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    ::propositions::Formula::and(&(#left_tokens), &(#right_tokens))
                }
            }
            Prop::Or(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    ::propositions::Formula::or(&(#left_tokens), &(#right_tokens))
                }
            }
            Prop::Implies(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    ::propositions::Formula::implies(&(#left_tokens), &(#right_tokens))
                }
            }
        }
    }
}

/// Parser for formulas with operator precedence
struct PropParser {
    prop: Prop,
}

impl Parse for PropParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let prop = parse_implies(input)?;
        Ok(PropParser { prop })
    }
}

/// Parse implications (lowest precedence, right associative)
fn parse_implies(input: ParseStream) -> Result<Prop> {
    let left = parse_or(input)?;

    if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        let right = parse_implies(input)?;
        return Ok(Prop::Implies(Box::new(left), Box::new(right)));
    }

    Ok(left)
}

fn parse_or(input: ParseStream) -> Result<Prop> {
    let mut left = parse_and(input)?;

    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let right = parse_and(input)?;
        left = Prop::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_and(input: ParseStream) -> Result<Prop> {
    let mut left = parse_unary(input)?;

    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let right = parse_unary(input)?;
        left = Prop::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse negations and atoms (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Prop> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Prop::Not(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Prop::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

fn parse_atom(input: ParseStream) -> Result<Prop> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_implies(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "atom names must not be empty"));
        }
        Ok(Prop::StringLiteral(lit))
    } else if input.peek(syn::LitInt) || input.peek(syn::LitBool) {
        Err(input.error("propositional formulas have no constants; use a named atom"))
    } else {
        let ident: Ident = input.parse()?;
        Ok(Prop::Variable(ident))
    }
}

/// The `prop!` procedural macro for propositional formulas
///
/// # Supported Syntax
///
/// - `p` - any `Formula` identifier in scope (borrowed, not moved)
/// - `"p"` - string literal, creates `Formula::variable("p")`
/// - `!p` or `~p` - negation (wraps in `Not`, no double-negation collapse)
/// - `p * q` or `p & q` - conjunction
/// - `p + q` or `p | q` - disjunction
/// - `p -> q` - implication, encoded as `~p + q`
/// - `(p + q) * r` - grouping
///
/// Precedence from highest to lowest: parentheses, negation, conjunction,
/// disjunction, implication. Implication associates to the right.
///
/// # Examples
///
/// ```ignore
/// use propositions::{prop, Formula};
///
/// let excluded_middle = prop!("p" + !"p");
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// let modus_ponens = prop!((p * (p -> q)) -> q);
/// ```
#[proc_macro]
pub fn prop(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as PropParser);
    let tokens = parser.prop.to_tokens();
    TokenStream::from(tokens)
}
