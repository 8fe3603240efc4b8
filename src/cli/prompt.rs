//! Interactive credential prompting.

use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// Password substituted when the user submits a blank one.
pub const DEFAULT_PASSWORD: &str = "ecodadys";

/// Credentials entered by the user.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Prompt for email and password on the console.
///
/// The email prompt repeats until a non-blank value is entered; a blank
/// password falls back to [`DEFAULT_PASSWORD`].
pub fn prompt_credentials() -> Result<Credentials> {
    println!("Please login into your account.");
    let mut input = io::stdin().lock();
    read_credentials(&mut input)
}

fn read_credentials(input: &mut impl BufRead) -> Result<Credentials> {
    let mut email = String::new();
    while email.trim().is_empty() {
        print!("Enter your email: ");
        io::stdout().flush()?;

        email.clear();
        if input.read_line(&mut email)? == 0 {
            return Err(Error::Config(
                "stdin closed before an email was entered".into(),
            ));
        }
    }

    print!("Enter your password ({}): ", DEFAULT_PASSWORD);
    io::stdout().flush()?;

    let mut password = String::new();
    input.read_line(&mut password)?;
    let password = password.trim();

    Ok(Credentials {
        email: email.trim().to_string(),
        password: if password.is_empty() {
            DEFAULT_PASSWORD.to_string()
        } else {
            password.to_string()
        },
    })
}
