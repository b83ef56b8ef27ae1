//! Profile update submenu.

use super::{report, unrecognized};
use crate::app::App;
use crate::console::Console;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use profnet_core::ProfNetError;
use profnet_core::user::ProfileUpdate;

pub async fn update_menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        println!("\nUpdate Profile");
        println!("1. Change email");
        println!("2. Change password");
        println!("3. Change name");
        println!("4. Change date of birth");
        println!("9. < Return");
        let update = match console.read_choice()? {
            1 => ProfileUpdate::Email(console.read_line("\tEnter new email: ")?),
            2 => ProfileUpdate::Password(console.read_line("\tEnter new password: ")?),
            3 => ProfileUpdate::Name(console.read_line("\tEnter new name: ")?),
            4 => {
                let raw = console.read_line("\tEnter new date of birth (YYYY-MM-DD): ")?;
                match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                    Ok(date) => ProfileUpdate::DateOfBirth(date),
                    Err(_) => {
                        report(&ProfNetError::invalid_input("the date must be YYYY-MM-DD"));
                        continue;
                    }
                }
            }
            9 => break,
            _ => {
                unrecognized();
                continue;
            }
        };
        match app.profiles.update(user, update).await {
            Ok(()) => println!("{}", "Profile updated.".green()),
            Err(err) => report(&err),
        }
    }
    Ok(())
}
