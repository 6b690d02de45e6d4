use anyhow::Result;
use std::io::{self, BufRead, Write};

use gift_genie::models::{UserProfile, ViewMode};
use gift_genie::{Config, GiftService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the interactive surface stays clean
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();
    let mut service = GiftService::new(&config)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("GiftGenie - gift ideas for the Indian market");
    if !service.favorites().is_empty() {
        println!("({} saved gift(s) loaded)", service.favorites().len());
    }

    loop {
        let profile = read_profile(&mut lines)?;
        let Some(profile) = profile else {
            break;
        };

        println!("Curating suggestions...");
        service.submit(&profile).await;

        if let Some(error) = &service.state().error {
            println!("{error}");
        }
        render(&service);

        if !command_loop(&mut service, &mut lines)? {
            break;
        }
    }

    println!("Bye!");
    Ok(())
}

/// Collect the four required profile fields, re-prompting on empty input.
/// Returns None on end of input.
fn read_profile(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<UserProfile>> {
    let fields = ["Age", "Occasion", "Hobbies/Interests", "Budget"];
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        loop {
            print!("{field}: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(None);
            };
            let value = line?.trim().to_string();
            if value.is_empty() {
                println!("{field} is required.");
                continue;
            }
            values.push(value);
            break;
        }
    }
    let mut values = values.into_iter();
    Ok(Some(UserProfile {
        age: values.next().unwrap_or_default(),
        occasion: values.next().unwrap_or_default(),
        hobbies: values.next().unwrap_or_default(),
        budget: values.next().unwrap_or_default(),
    }))
}

fn render(service: &GiftService) {
    let gifts = service.displayed();
    let heading = match service.view() {
        ViewMode::Results => "Curated picks",
        ViewMode::Saved => "Saved gifts",
    };
    if gifts.is_empty() {
        println!("-- {heading}: nothing to show --");
        return;
    }
    println!("-- {heading} --");
    for (idx, gift) in gifts.iter().enumerate() {
        let marker = if service.is_favorite(&gift.id) {
            "♥"
        } else {
            " "
        };
        println!(
            "{} {}. {} [{}] ({})",
            marker,
            idx + 1,
            gift.gift_name,
            gift.budget_category,
            gift.kind
        );
        println!("     {}", gift.why_it_fits);
        println!("     For: {}", gift.target_audience);
        if !gift.alternatives.is_empty() {
            println!("     Alternatives: {}", gift.alternatives.join(", "));
        }
    }
}

/// Post-results commands. Returns Ok(false) to quit, Ok(true) to start a new
/// submission.
fn command_loop(
    service: &mut GiftService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        print!("[fav <n> | saved | results | new | quit] > ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line?;
        let mut parts = line.trim().split_whitespace();
        match parts.next() {
            Some("fav") => {
                let displayed = service.displayed();
                match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                    Some(n) if n >= 1 && n <= displayed.len() => {
                        let gift = displayed[n - 1].clone();
                        service.toggle_favorite(&gift);
                        let verb = if service.is_favorite(&gift.id) {
                            "Saved"
                        } else {
                            "Removed"
                        };
                        println!("{verb}: {}", gift.gift_name);
                    }
                    _ => println!("Usage: fav <number from the current list>"),
                }
            }
            Some("saved") => {
                service.set_view(ViewMode::Saved);
                render(service);
            }
            Some("results") => {
                service.set_view(ViewMode::Results);
                render(service);
            }
            Some("new") => return Ok(true),
            Some("quit") | Some("exit") => return Ok(false),
            Some(other) => println!("Unknown command: {other}"),
            None => {}
        }
    }
}
