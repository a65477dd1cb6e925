//! Normal forms step by step
//!
//! Run with `cargo run --example normal_forms`.

use propositions::normal_form::clauses;
use propositions::{Checker, Formula};

fn main() -> std::io::Result<()> {
    let checker = Checker::new();

    for text in [
        "~(p * (q + ~r))",
        "(p + q) + ~p * ~q",
        "p * q + r * s",
        "((p -> q) -> p) -> p",
    ] {
        let formula = Formula::parse(text)?;
        let nnf = checker.to_nnf(&formula)?;
        let cnf = checker.to_cnf(&nnf)?;

        println!("formula: {}", formula);
        println!("  nnf:   {}", nnf);
        println!("  cnf:   {}", cnf);
        for clause in clauses(&cnf)? {
            let complementary: Vec<String> =
                clause.complementary_atoms().map(|a| a.to_string()).collect();
            println!("    [{}] complementary: {:?}", clause, complementary);
        }
        println!("  valid: {}", checker.is_valid(&formula)?);
        println!();
    }

    Ok(())
}
