//! Profile viewing, connection browsing, and search.
//!
//! These menus recurse into each other (a connection list opens a profile,
//! a profile opens its connection list), so the entry points return boxed
//! futures.

use super::{messaging, report, unrecognized};
use crate::app::App;
use crate::console::Console;
use anyhow::Result;
use colored::Colorize;
use profnet_core::profile::ProfileView;
use std::future::Future;
use std::pin::Pin;

type MenuFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;

/// Shows `target`'s profile to `viewer` and offers the gated actions.
///
/// Profile fields and history render regardless of connection status; the
/// extended actions only appear when the composed view allows them.
pub fn view_profile<'a>(
    app: &'a App,
    console: &'a mut Console,
    viewer: &'a str,
    target: String,
) -> MenuFuture<'a> {
    Box::pin(async move {
        let view = match app.profiles.view(viewer, &target).await {
            Ok(view) => view,
            Err(err) => {
                report(&err);
                return Ok(());
            }
        };
        render(&view);

        loop {
            println!();
            if view.can_view_connections {
                println!("1. View {target}'s connections");
            }
            println!("2. Send message");
            if view.can_send_request {
                println!("3. Send connection request");
            }
            println!("9. Return");
            match console.read_choice()? {
                1 if view.can_view_connections => {
                    browse_connections(app, &mut *console, viewer, target.clone()).await?;
                }
                2 => messaging::send_to(app, &mut *console, viewer, &target).await?,
                3 if view.can_send_request => {
                    match app.connections.send_request(viewer, &target).await {
                        Ok(()) => {
                            println!(
                                "{}",
                                format!("Connection request sent to '{target}'.").green()
                            );
                        }
                        Err(err) => report(&err),
                    }
                }
                9 => break,
                _ => unrecognized(),
            }
        }
        Ok(())
    })
}

/// Lists `owner`'s accepted connections and lets `viewer` open one.
pub fn browse_connections<'a>(
    app: &'a App,
    console: &'a mut Console,
    viewer: &'a str,
    owner: String,
) -> MenuFuture<'a> {
    Box::pin(async move {
        let others = match app.connections.list_accepted(&owner).await {
            Ok(others) => others,
            Err(err) => {
                report(&err);
                return Ok(());
            }
        };
        if others.is_empty() {
            println!("No connections yet. Try sending connection requests.");
            return Ok(());
        }

        loop {
            println!("\n{owner}'s connection list:");
            for (i, other) in others.iter().enumerate() {
                println!("{}. {other}", i + 1);
            }
            println!("\n1. View connection profile");
            println!("2. Send message");
            println!("---------");
            println!("9. Return to previous menu");
            match console.read_choice()? {
                1 => {
                    let Some(index) =
                        console.read_index("Enter the number of the connection: ", others.len())?
                    else {
                        continue;
                    };
                    view_profile(app, &mut *console, viewer, others[index].clone()).await?;
                }
                2 => {
                    let Some(index) =
                        console.read_index("Enter the number of the connection: ", others.len())?
                    else {
                        continue;
                    };
                    messaging::send_to(app, &mut *console, viewer, &others[index]).await?;
                }
                9 => break,
                _ => unrecognized(),
            }
        }
        Ok(())
    })
}

/// Exact-name user search, with view/message follow-ups.
pub async fn search(app: &App, console: &mut Console, viewer: &str) -> Result<()> {
    let first = console.read_line("Enter the first name: ")?;
    let last = console.read_line("Enter the last name: ")?;
    let full_name = format!("{first} {last}");

    let matches = match app.profiles.search_by_name(&full_name).await {
        Ok(matches) => matches,
        Err(err) => {
            report(&err);
            return Ok(());
        }
    };
    if matches.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (i, login) in matches.iter().enumerate() {
        println!("{}. {login}", i + 1);
    }

    loop {
        println!("\n1. View profile");
        println!("2. Send message");
        println!("9. Return");
        match console.read_choice()? {
            1 => {
                let Some(index) =
                    console.read_index("Enter the number of the user: ", matches.len())?
                else {
                    continue;
                };
                view_profile(app, &mut *console, viewer, matches[index].clone()).await?;
            }
            2 => {
                let Some(index) =
                    console.read_index("Enter the number of the user: ", matches.len())?
                else {
                    continue;
                };
                messaging::send_to(app, &mut *console, viewer, &matches[index]).await?;
            }
            9 => break,
            _ => unrecognized(),
        }
    }
    Ok(())
}

fn render(view: &ProfileView) {
    println!();
    match &view.profile {
        Some(profile) => {
            println!(
                "Name: {}",
                profile.name.as_deref().unwrap_or(&view.user_id)
            );
            match profile.date_of_birth {
                Some(date) => println!("Date of birth: {date}"),
                None => println!("Date of birth: -"),
            }
        }
        None => println!("User: {}", view.user_id),
    }

    println!("\nWork Experience:");
    if view.work_experience.is_empty() {
        println!("\tNone");
    }
    for (i, work) in view.work_experience.iter().enumerate() {
        let until = work
            .end_date
            .map_or_else(|| "present".to_string(), |d| d.to_string());
        let location = work.location.as_deref().unwrap_or("-");
        println!(
            "\t{}. {} at {} ({location}), {} - {until}",
            i + 1,
            work.role,
            work.company,
            work.start_date,
        );
    }

    println!("\nEducation:");
    if view.education.is_empty() {
        println!("\tNone");
    }
    for (i, education) in view.education.iter().enumerate() {
        let until = education
            .end_date
            .map_or_else(|| "present".to_string(), |d| d.to_string());
        println!(
            "\t{}. {} in {} at {}, {} - {until}",
            i + 1,
            education.degree,
            education.major,
            education.institution_name,
            education.start_date,
        );
    }

    if view.connected {
        println!("\n{}", "You are connected with this user.".green());
    }
}
