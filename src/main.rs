use std::io::{BufRead, Write};

use anyhow::Context;
use newsletter_signup::{configuration, form, telemetry};

/// Terminal stand-in for the newsletter page: one editable field, a submit per
/// entered line, and the success panel's "subscribe another email" choice.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber =
        telemetry::get_subscriber("newsletter-signup".into(), "info".into(), std::io::stderr);
    telemetry::init_subscriber(subscriber);

    let configuration =
        configuration::get_configuration().context("Failed to read configuration")?;
    let mut signup_form = form::SignupForm::new(configuration.newsletter.client());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match signup_form.state().clone() {
            form::SubmissionState::Success(email) => {
                println!("Subscription successful!");
                println!("Please check your email at {} to confirm.", email);
                let answer = match prompt(&mut lines, "Subscribe another email? [y/N] ")? {
                    Some(answer) => answer,
                    None => break,
                };
                if !answer.eq_ignore_ascii_case("y") {
                    break;
                }
                signup_form.reset();
            }
            state => {
                if let form::SubmissionState::Failed(message) = state {
                    println!("{}", message);
                }
                let value = match prompt(&mut lines, "Email address (empty to quit): ")? {
                    Some(value) if !value.is_empty() => value,
                    _ => break,
                };

                signup_form.update_field(value);
                match signup_form.validation_error() {
                    Some(reason) => println!("{}", reason),
                    None => {
                        println!("Subscribing...");
                        signup_form.submit().await;
                    }
                }
            }
        }
    }

    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    message: &str,
) -> Result<Option<String>, anyhow::Error> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(
            line.context("Failed to read stdin")?.trim().to_string(),
        )),
        None => Ok(None),
    }
}
