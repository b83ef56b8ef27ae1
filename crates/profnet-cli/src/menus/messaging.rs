//! Messenger menus: reading, sending, and deleting messages.

use super::{report, unrecognized};
use crate::app::App;
use crate::console::Console;
use anyhow::Result;
use colored::Colorize;
use profnet_core::message::{DeleteSide, InboxEntry, SentEntry};

pub async fn menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        println!("\nMessenger Menu");
        println!("---------");
        println!("1. Read menu");
        println!("2. Send menu");
        println!(".........................");
        println!("9. Return to main menu");
        match console.read_choice()? {
            1 => read_menu(app, console, user).await?,
            2 => send_menu(app, console, user).await?,
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}

/// Prompts for the message text and sends it to a known receiver; used by
/// the profile/connection browsers as well as the send menu.
pub async fn send_to(app: &App, console: &mut Console, sender: &str, receiver: &str) -> Result<()> {
    let contents = console.read_line("Enter the message you want to send: ")?;
    match app.messages.send(sender, receiver, &contents).await {
        Ok(msg_id) => println!("{}", format!("Message {msg_id} sent to '{receiver}'.").green()),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn read_menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        println!("\nRead Messages Menu");
        println!("---------");
        println!("1. Show new messages");
        println!("2. Read message");
        println!("3. Show all received messages");
        println!("4. Delete received message");
        println!("---------");
        println!("9. Return to Messenger Menu");
        match console.read_choice()? {
            1 => match app.messages.list_unread(user).await {
                Ok(unread) if unread.is_empty() => println!("There are no unread messages."),
                Ok(unread) => print_inbox(&unread),
                Err(err) => report(&err),
            },
            2 => read_one(app, console, user).await?,
            3 => match app.messages.list_inbox(user).await {
                Ok(inbox) if inbox.is_empty() => println!("There are no messages in your inbox."),
                Ok(inbox) => print_inbox(&inbox),
                Err(err) => report(&err),
            },
            4 => delete_one(app, console, user, DeleteSide::Receiver).await?,
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}

async fn send_menu(app: &App, console: &mut Console, user: &str) -> Result<()> {
    loop {
        println!("\nSend Messages Menu");
        println!("---------");
        println!("1. Send message");
        println!("2. List of sent messages");
        println!("3. View a sent message");
        println!("4. Delete sent message");
        println!("---------");
        println!("9. Return to Messenger Menu");
        match console.read_choice()? {
            1 => {
                let receiver = console.read_line("Enter the login of the receiver: ")?;
                if !receiver.is_empty() {
                    send_to(app, console, user, &receiver).await?;
                }
            }
            2 => match app.messages.list_sent(user).await {
                Ok(sent) if sent.is_empty() => println!("You have no sent messages."),
                Ok(sent) => print_sent(&sent),
                Err(err) => report(&err),
            },
            3 => view_sent(app, console, user).await?,
            4 => delete_one(app, console, user, DeleteSide::Sender).await?,
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}

async fn read_one(app: &App, console: &mut Console, user: &str) -> Result<()> {
    let Some(msg_id) = console.read_id("Enter the message id you would like to read: ")? else {
        return Ok(());
    };
    match app.messages.read(msg_id, user).await {
        Ok(contents) => println!("\n{contents}"),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn view_sent(app: &App, console: &mut Console, user: &str) -> Result<()> {
    let Some(msg_id) = console.read_id("Enter the message id you want to view: ")? else {
        return Ok(());
    };
    match app.messages.view_sent(msg_id, user).await {
        Ok(contents) => println!("\nMessage: {contents}"),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn delete_one(app: &App, console: &mut Console, user: &str, side: DeleteSide) -> Result<()> {
    let Some(msg_id) = console.read_id("Enter the message id you would like to delete: ")? else {
        return Ok(());
    };
    match app.messages.delete(msg_id, user, side).await {
        Ok(()) => println!("{}", "Message deleted.".green()),
        Err(err) => report(&err),
    }
    Ok(())
}

fn print_inbox(entries: &[InboxEntry]) {
    println!("id\tfrom\tstatus");
    for entry in entries {
        println!("{}\t{}\t{}", entry.msg_id, entry.sender_id, entry.status);
    }
}

fn print_sent(entries: &[SentEntry]) {
    println!("id\tto\tstatus");
    for entry in entries {
        println!("{}\t{}\t{}", entry.msg_id, entry.receiver_id, entry.status);
    }
}
