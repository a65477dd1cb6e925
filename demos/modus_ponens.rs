//! Checking classic argument forms
//!
//! Run with `cargo run --example modus_ponens`.

use propositions::{parse_assignment, prop, Argument, Checker, Formula};

fn main() -> std::io::Result<()> {
    let checker = Checker::new();
    let p = Formula::variable("p");
    let q = Formula::variable("q");

    let forms = [
        ("modus ponens", vec![p.clone(), prop!(p -> q)], q.clone()),
        ("modus tollens", vec![prop!(p -> q), prop!(!q)], prop!(!p)),
        ("affirming the consequent", vec![q.clone(), prop!(p -> q)], p.clone()),
        ("denying the antecedent", vec![prop!(!p), prop!(p -> q)], prop!(!q)),
    ];

    for (name, premises, conclusion) in forms {
        let valid = checker.check_argument(&premises, &conclusion)?;
        println!("{:<26} {}", name, if valid { "valid" } else { "invalid" });
    }

    // Soundness depends on the facts
    let argument = Argument::parse("p\np -> q\ntherefore q\n")?;
    for facts in ["p=true, q=true", "p=false, q=true"] {
        let assignment = parse_assignment(facts)?;
        let sound = checker.is_sound(argument.premises(), argument.conclusion(), &assignment)?;
        println!("modus ponens with {:<16} {}", facts, if sound { "sound" } else { "unsound" });
    }

    Ok(())
}
