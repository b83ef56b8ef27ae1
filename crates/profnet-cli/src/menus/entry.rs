//! Entry menu (account creation, login) and the post-login main menu.

use super::{connections, messaging, profile, report, unrecognized, view};
use crate::app::App;
use crate::console::Console;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use profnet_core::ProfNetError;
use profnet_core::user::NewAccount;

/// The pre-login loop. Returns when the user exits the program.
pub async fn run(app: &App, console: &mut Console) -> Result<()> {
    loop {
        println!("\nMAIN MENU");
        println!("---------");
        println!("1. Create user");
        println!("2. Log in");
        println!("9. < EXIT");
        match console.read_choice()? {
            1 => create_account(app, console).await?,
            2 => {
                if let Some(user) = log_in(app, console).await? {
                    main_menu(app, console, &user).await?;
                }
            }
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}

async fn create_account(app: &App, console: &mut Console) -> Result<()> {
    let login = console.read_line("\tEnter user login: ")?;
    let password = console.read_line("\tEnter user password: ")?;
    let email = console.read_line("\tEnter user email: ")?;
    let name = console.read_line("\tEnter full name (optional): ")?;
    let dob = console.read_line("\tEnter date of birth YYYY-MM-DD (optional): ")?;

    let date_of_birth = if dob.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&dob, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                report(&ProfNetError::invalid_input("the date must be YYYY-MM-DD"));
                return Ok(());
            }
        }
    };

    let account = NewAccount {
        login,
        password,
        email,
        full_name: (!name.is_empty()).then_some(name),
        date_of_birth,
    };
    match app.accounts.create_account(&account).await {
        Ok(()) => println!("{}", "User successfully created!".green()),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn log_in(app: &App, console: &mut Console) -> Result<Option<String>> {
    let login = console.read_line("\tEnter user login: ")?;
    let password = console.read_line("\tEnter user password: ")?;
    match app.accounts.authenticate(&login, &password).await {
        Ok(user) => Ok(Some(user)),
        Err(err) => {
            report(&err);
            Ok(None)
        }
    }
}

async fn main_menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        println!("\nMAIN MENU ({user})");
        println!("---------");
        println!("1. View connections");
        println!("2. Update profile");
        println!("3. Connection requests");
        println!("4. Search");
        println!("5. Message service");
        println!(".........................");
        println!("9. Log out");
        match console.read_choice()? {
            1 => view::browse_connections(app, console, user, user.to_string()).await?,
            2 => profile::update_menu(app, console, user).await?,
            3 => connections::menu(app, console, user).await?,
            4 => view::search(app, console, user).await?,
            5 => messaging::menu(app, console, user).await?,
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}
