//! Interactive chat loop.
//!
//! Reads messages from the terminal and round-trips them through a
//! single session. In-band commands:
//!
//! - `/clear`   empty the transcript
//! - `/forget`  empty the key-value memory
//! - `/history` print the transcript
//! - `/summary` ask the model for a 2-3 sentence summary
//! - `/stats`   transcript counts
//! - `/quit`    exit (also `exit`)

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use console::style;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use confab_core::persona::Persona;
use confab_core::session::Session;
use confab_infra::openai::OpenAiClient;

/// Run the interactive chat loop until the user quits.
pub async fn run(persona: Option<Persona>, model: Option<String>) -> anyhow::Result<()> {
    let data_dir = confab_infra::settings::resolve_data_dir();
    let settings = confab_infra::settings::load_settings(&data_dir).await;
    let api_key = confab_infra::credential::api_key_from_env()?;

    let client = OpenAiClient::new(api_key);
    let mut session = match persona {
        Some(persona) => {
            println!("{} {persona}", style("persona:").dim());
            Session::with_persona(client, persona)
        }
        None => Session::new(client),
    };
    session.set_model(model.unwrap_or_else(|| settings.chat.model.clone()));
    if persona.is_none() {
        session.set_temperature(settings.chat.temperature);
    }
    session.set_max_output_tokens(settings.chat.max_output_tokens);

    println!(
        "{} model {} — /clear /forget /history /summary /stats /quit\n",
        style("confab").bold().cyan(),
        style(&session.config().model).green(),
    );

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" | "exit" => {
                println!("{}", style("goodbye").dim());
                break;
            }
            "/clear" => {
                session.clear_history();
                println!("{}", style("transcript cleared").dim());
            }
            "/forget" => {
                session.forget_all();
                println!("{}", style("memory cleared").dim());
            }
            "/history" => print_history(&session),
            "/stats" => print_stats(&session),
            "/summary" => match session.summarize().await {
                Ok(summary) => println!("\n{}\n", style(summary).italic()),
                Err(e) => eprintln!("{} {e}", style("error:").red()),
            },
            message => match session.send(message).await {
                Ok(reply) => println!("\n{} {reply}\n", style("assistant:").bold().green()),
                Err(e) => eprintln!("{} {e}", style("error:").red()),
            },
        }
    }

    Ok(())
}

fn print_history(session: &Session<OpenAiClient>) {
    if session.transcript().is_empty() {
        println!("{}", style("no messages yet").dim());
        return;
    }
    for turn in session.transcript() {
        println!("{} {}", style(format!("{}:", turn.role)).bold(), turn.content);
    }
}

fn print_stats(session: &Session<OpenAiClient>) {
    let stats = session.stats();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(["total", "user", "assistant"])
        .add_row([
            stats.total.to_string(),
            stats.user_count.to_string(),
            stats.assistant_count.to_string(),
        ]);
    println!("{table}");
}
