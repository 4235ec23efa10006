//! Interactive terminal chat.

use anyhow::Result;
use chrono::Local;
use meggie_core::{Conversation, Meggie, Message};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

pub async fn run(meggie: &Meggie) -> Result<()> {
    let mut conversation = Conversation::new();
    for message in conversation.messages() {
        print_message(message);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&text) {
            break;
        }

        println!("Meggie is thinking...");
        let reply = conversation.send(meggie, text).await;
        print_message(reply);
    }

    println!("Happy cooking! 😊");
    Ok(())
}

fn print_message(message: &Message) {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    let who = if message.is_user { "You" } else { "Meggie" };
    println!("\n[{}] {}:\n{}\n", time, who, message.text);
}
