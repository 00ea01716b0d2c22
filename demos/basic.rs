//! Basic field typing example.
//!
//! Run with: `cargo run --example basic`

use tfield::{filter, reconstruct, validate_result, Field, FieldKind};

fn show(event: &str, field: &Field) {
    println!(
        "  {:<8} text={:<22} ghost={:<22} state={}",
        event,
        format!("{:?}", field.text()),
        format!("{:?}", field.partial_template()),
        field.state()
    );
}

fn main() {
    println!("=== Typing Into a Field ===\n");

    // Example 1: An expiration date, one keystroke at a time
    let mut exp = Field::new(FieldKind::ExpirationDate)
        .required(true)
        .label("Exp Date");
    println!("{}:", exp.display_label());

    exp.set_focus(true);
    show("focus", &exp);

    for key in "1327".chars() {
        let mut next = exp.text().to_string();
        next.push(key);
        exp.set_text(&next);
        show(&key.to_string(), &exp);

        if let Some(message) = exp.state().message() {
            println!("           -> {}", message);
            // Undo the bad keystroke, like a user would
            let mut fixed = exp.text().to_string();
            fixed.pop();
            exp.set_text(&fixed);
        }
    }

    let next = format!("{}28", exp.text());
    exp.set_text(&next);
    show("28", &exp);

    exp.set_focus(false);
    show("blur", &exp);
    println!();

    // Example 2: Required field left empty
    let mut cvv = Field::new(FieldKind::Cvv).required(true);
    println!("{}:", cvv.display_label());
    cvv.set_focus(true);
    cvv.set_focus(false);
    show("blur", &cvv);
    println!();

    // Example 3: The stages on their own
    println!("Stages:");
    let raw = "4111-1111-1111-1111";
    let data = filter(FieldKind::CreditCard, raw);
    let formatted = reconstruct(FieldKind::CreditCard, &data);
    println!("  raw:       {}", raw);
    println!("  data:      {}", data);
    println!("  formatted: {}", formatted.text);
    match validate_result(FieldKind::CreditCard, &formatted.text) {
        Ok(()) => println!("  valid:     yes"),
        Err(e) => println!("  valid:     no ({})", e),
    }
}
