use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "movies-cli")]
#[command(about = "Command-line client for the movies API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:1234")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies, optionally filtered by genre
    List {
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Show one movie
    Get { id: String },
    /// Create a movie; every field is required
    Create(MovieFields),
    /// Change some fields of a movie
    Update {
        id: String,
        #[command(flatten)]
        fields: MovieFields,
    },
}

#[derive(Args)]
struct MovieFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    year: Option<u32>,
    #[arg(long)]
    director: Option<String>,
    #[arg(long)]
    duration: Option<u32>,
    #[arg(long)]
    poster: Option<String>,
    /// Repeat for several genres
    #[arg(long)]
    genre: Vec<String>,
}

impl MovieFields {
    /// JSON body with only the flags that were given.
    fn to_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(title) = &self.title {
            body.insert("title".into(), title.clone().into());
        }
        if let Some(year) = self.year {
            body.insert("year".into(), year.into());
        }
        if let Some(director) = &self.director {
            body.insert("director".into(), director.clone().into());
        }
        if let Some(duration) = self.duration {
            body.insert("duration".into(), duration.into());
        }
        if let Some(poster) = &self.poster {
            body.insert("poster".into(), poster.clone().into());
        }
        match self.genre.as_slice() {
            [] => {}
            [single] => {
                body.insert("genre".into(), single.clone().into());
            }
            many => {
                body.insert("genre".into(), many.to_vec().into());
            }
        }
        Value::Object(body)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::List { genre } => {
            let mut req = client.get(format!("{}/movies", base));
            if let Some(genre) = genre {
                req = req.query(&[("genre", genre)]);
            }
            print_response(req.send().await?).await?;
        }
        Commands::Get { id } => {
            let res = client.get(format!("{}/movies/{}", base, id)).send().await?;
            print_response(res).await?;
        }
        Commands::Create(fields) => {
            let res = client
                .post(format!("{}/movies", base))
                .json(&fields.to_body())
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Update { id, fields } => {
            let res = client
                .patch(format!("{}/movies/{}", base, id))
                .json(&fields.to_body())
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: movies API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
