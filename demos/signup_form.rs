use std::cell::Cell;
use std::rc::Rc;

use rust_decimal::Decimal;
use text_rules::TextRulesExt;

struct SignupForm<'a> {
    email: &'a str,
    phone: &'a str,
    wants_sms: bool,
    deposit: &'a str,
}

fn check(form: &SignupForm<'_>) -> Vec<String> {
    let wants_sms = Rc::new(Cell::new(form.wants_sms));
    let mut errors = Vec::new();

    let mut email = form.email.text_rules().hint("Email").email();

    // The phone number is only required when SMS notifications are wanted.
    let guard = Rc::clone(&wants_sms);
    let mut phone = form
        .phone
        .text_rules_with(false)
        .depends_on(move || guard.get())
        .transform_input(|s| s.replace([' ', '-'], ""))
        .indonesia_phone_number()
        .depends_on(move || wants_sms.get());

    let mut deposit = form
        .deposit
        .text_rules()
        .hint("Deposit")
        .number_only(false)
        .between_amount(Decimal::from(50_000), Decimal::from(10_000_000));

    for chain in [&mut email, &mut phone, &mut deposit] {
        if let Err(err) = chain.validate() {
            errors.push(err.to_string());
        }
    }
    errors
}

fn main() {
    let forms = [
        SignupForm {
            email: "budi@example.co.id",
            phone: "",
            wants_sms: false,
            deposit: "100000",
        },
        SignupForm {
            email: "budi(at)example",
            phone: "0812-3456-7890",
            wants_sms: true,
            deposit: "500",
        },
        SignupForm {
            email: "sari@example.com",
            phone: "12345",
            wants_sms: true,
            deposit: "75000",
        },
    ];

    for (i, form) in forms.iter().enumerate() {
        let errors = check(form);
        if errors.is_empty() {
            println!("form {i}: ok");
        } else {
            println!("form {i}: {}", errors.join("; "));
        }
    }
}
