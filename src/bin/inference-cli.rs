use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "inference-cli")]
#[command(about = "Command-line client for the inference API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health and uptime
    Health,
    /// Fetch the greeting
    Root,
    /// Echo a message back through the path parameter
    Echo { message: String },
    /// Rank the tokens of a text
    Predict {
        text: String,
        #[arg(short = 'k', long)]
        top_k: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Root => client.get(format!("{}/", base)).send().await?,
        Commands::Echo { message } => {
            let mut url = reqwest::Url::parse(base)?;
            url.path_segments_mut()
                .map_err(|_| "URL cannot carry a path")?
                .pop_if_empty()
                .extend(["echo", message.as_str()]);
            client.get(url).send().await?
        }
        Commands::Predict { text, top_k } => {
            client
                .post(format!("{}/predict", base))
                .json(&json!({ "text": text, "top_k": top_k }))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
