//! Connection menu: pending requests and outgoing requests.

use super::{report, unrecognized, view};
use crate::app::App;
use crate::console::Console;
use anyhow::Result;
use colored::Colorize;
use profnet_core::connection::ConnectionDecision;

pub async fn menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        println!("\nConnection Menu");
        println!("1. View connection list");
        println!("2. Accept/Decline requests");
        println!("3. Send connection request");
        println!("---------");
        println!("9. Return to main menu");
        match console.read_choice()? {
            1 => view::browse_connections(app, console, user, user.to_string()).await?,
            2 => respond_menu(app, console, user).await?,
            3 => send_request(app, console, user).await?,
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}

async fn send_request(app: &App, console: &mut Console, user: &str) -> Result<()> {
    let target = console.read_line("Enter the login of the person you want to connect with: ")?;
    if target.is_empty() {
        return Ok(());
    }
    match app.connections.send_request(user, &target).await {
        Ok(()) => println!("{}", format!("Connection request sent to '{target}'.").green()),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn respond_menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        let pending = match app.connections.list_pending(user).await {
            Ok(pending) => pending,
            Err(err) => {
                report(&err);
                return Ok(());
            }
        };
        if pending.is_empty() {
            println!("There are no pending connection requests.");
            return Ok(());
        }

        println!("\nConnection Requests:");
        for (i, requester) in pending.iter().enumerate() {
            println!("{}. {requester}", i + 1);
        }
        println!("\n1. Accept request");
        println!("2. Reject request");
        println!("---------");
        println!("9. Return to Connection Menu");

        let decision = match console.read_choice()? {
            1 => ConnectionDecision::Accept,
            2 => ConnectionDecision::Reject,
            9 => break,
            _ => {
                unrecognized();
                continue;
            }
        };
        let Some(index) = console.read_index("Enter the number of the request: ", pending.len())?
        else {
            continue;
        };
        match app.connections.respond(user, &pending[index], decision).await {
            Ok(()) => println!("{}", "Request updated.".green()),
            Err(err) => report(&err),
        }
    }
    Ok(())
}
