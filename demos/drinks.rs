//! Drinks Example
//!
//! Demonstrates composing specifications with `&`, `|` and `!`, reading the
//! reasons a drink was rejected, and reusing rules written for a trait on
//! concrete types with `cast_up`.
//!
//! Run with: cargo run --example drinks

use specifica::prelude::*;

// ============================================================================
// Domain
// ============================================================================

trait Beverage {
    fn name(&self) -> &str;
    fn with(&self) -> &[String];
}

#[derive(Debug)]
struct Drink {
    name: String,
    with: Vec<String>,
}

impl Drink {
    fn new(name: &str, with: &[&str]) -> Self {
        Drink {
            name: name.to_string(),
            with: with.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Beverage for Drink {
    fn name(&self) -> &str {
        &self.name
    }

    fn with(&self) -> &[String] {
        &self.with
    }
}

impl AsRef<dyn Beverage> for Drink {
    fn as_ref(&self) -> &(dyn Beverage + 'static) {
        self
    }
}

// ============================================================================
// Rules
// ============================================================================

fn name_contains(needle: &'static str, code: i32) -> Spec<dyn Beverage> {
    Spec::<dyn Beverage>::rule(
        move |d| d.name().to_lowercase().contains(needle),
        Reason::new(code, format!("not {}", needle)),
    )
}

fn cold() -> Spec<dyn Beverage> {
    Spec::<dyn Beverage>::rule(
        |d| d.with().iter().any(|w| w.eq_ignore_ascii_case("ice")),
        Reason::new(2, "not a cold drink"),
    )
}

fn report(label: &str, outcome: Outcome) {
    match outcome {
        Validation::Success(()) => println!("  {:<18} accepted", label),
        Validation::Failure(reason) => println!("  {:<18} rejected: {}", label, reason),
    }
}

fn main() {
    let menu = vec![
        Drink::new("whiskey", &["ice"]),
        Drink::new("whiskey", &[]),
        Drink::new("apple juice", &[]),
        Drink::new("orange juice", &["ice"]),
        Drink::new("blackberry juice", &[]),
    ];

    let cold_whiskey: Spec<Drink> = (name_contains("whiskey", 1) & cold()).cast_up();
    let fruit_juice: Spec<Drink> =
        (name_contains("juice", 3) & (name_contains("apple", 4) | name_contains("orange", 5)))
            .cast_up();
    let anything_but_whiskey: Spec<Drink> = (!name_contains("whiskey", 1)).cast_up();

    println!("=== Cold whiskey ===");
    for drink in &menu {
        report(&drink.name, drink.satisfies(&cold_whiskey));
    }

    println!("\n=== Apple or orange juice ===");
    for drink in &menu {
        report(&drink.name, drink.satisfies(&fruit_juice));
    }

    println!("\n=== Whole menu as fruit juice ===");
    match menu.iter().all_satisfy(&fruit_juice) {
        Validation::Success(()) => println!("  every drink is a fruit juice"),
        Validation::Failure(reason) => {
            println!("  {} problem(s):", reason.leaf_count());
            for leaf in reason.flatten() {
                println!("    [{}] {}", leaf.code(), leaf.message());
            }
        }
    }

    println!("\n=== Safe for the designated driver ===");
    for drink in menu.iter().satisfying(&anything_but_whiskey) {
        println!("  {}", drink.name);
    }
}
