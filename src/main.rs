// Line-oriented client for a PlatePal recipe server

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use platepal::{
    create_recipe, login, logout, signup, split_tags, ApiClient, Feed, Profile, RecipeDetails,
    RecipeEdit, BASE_URL_ENV,
};

#[derive(Parser)]
#[command(name = "platepal")]
#[command(about = "Terminal client for a PlatePal recipe server", long_about = None)]
struct Cli {
    /// Server URL (default: RECIPE_API_URL, then http://localhost:8080)
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = match cli.server {
        Some(server) => server,
        None => std::env::var(BASE_URL_ENV).unwrap_or_else(|_| "http://localhost:8080".to_string()),
    };
    let client = ApiClient::new(base_url)?;
    println!("Connected to {}", client.base_url());
    println!("Type 'help' for commands.");
    run_shell(&client).await
}

async fn run_shell(client: &ApiClient) -> Result<()> {
    let mut feed = Feed::new();
    let mut open_recipe: Option<RecipeDetails> = None;

    loop {
        let line = prompt("> ")?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();

        match command {
            "help" => print_help(),
            "quit" | "exit" => return Ok(()),

            // ----------------- Auth -----------------
            "login" => {
                let (email, password) = match rest.as_slice() {
                    [email, password] => (*email, *password),
                    _ => {
                        println!("Usage: login <email> <password>");
                        continue;
                    }
                };
                match login(client, email, password).await {
                    Ok(user) => println!("Welcome {}!", user.username),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "signup" => {
                let (username, email, password) = match rest.as_slice() {
                    [username, email, password] => (*username, *email, *password),
                    _ => {
                        println!("Usage: signup <username> <email> <password>");
                        continue;
                    }
                };
                match signup(client, username, email, password).await {
                    Ok(()) => println!("Sign up successful. Welcome, {username}!"),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "logout" => match logout(client).await {
                Ok(()) => println!("You have been logged out successfully."),
                Err(error) => println!("{}", error.user_message()),
            },

            // ----------------- Profile -----------------
            "profile" => match Profile::load(client).await {
                Ok(profile) => print_profile(&profile),
                Err(error) => println!("{}", error.user_message()),
            },
            "update" => match Profile::load(client).await {
                Ok(mut profile) => {
                    let username = prompt(&format!("Username [{}]: ", profile.user.username))?;
                    let username = if username.is_empty() {
                        profile.user.username.clone()
                    } else {
                        username
                    };
                    let email = prompt(&format!("Email [{}]: ", profile.user.email))?;
                    let email = if email.is_empty() {
                        profile.user.email.clone()
                    } else {
                        email
                    };
                    let password = prompt("Password (required): ")?;
                    match profile
                        .update_profile(client, &username, &email, &password)
                        .await
                    {
                        Ok(message) => println!("{message}"),
                        Err(error) => println!("{}", error.user_message()),
                    }
                }
                Err(error) => println!("{}", error.user_message()),
            },

            // ----------------- Feed -----------------
            "feed" => match feed.refresh(client).await {
                Ok(()) => print_feed(&feed),
                Err(error) => println!("{}", error.user_message()),
            },
            "search" => {
                if feed.all().is_empty() {
                    if let Err(error) = feed.refresh(client).await {
                        println!("{}", error.user_message());
                        continue;
                    }
                }
                feed.search(&rest.join(" "));
                print_feed(&feed);
            }

            // ----------------- Recipes -----------------
            "open" => {
                let Some(recipe_id) = rest.first().and_then(|raw| raw.parse::<i64>().ok()) else {
                    println!("Usage: open <recipe-id>");
                    continue;
                };
                match RecipeDetails::load(client, recipe_id).await {
                    Ok(details) => {
                        print_details(&details);
                        open_recipe = Some(details);
                    }
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "new" => {
                let title = prompt("Title: ")?;
                let ingredients = prompt("Ingredients: ")?;
                let instructions = prompt("Instructions: ")?;
                let tags = prompt("Dietary tags (comma-separated, optional): ")?;
                let image_url = prompt("Image URL (optional): ")?;
                let result = create_recipe(
                    client,
                    &title,
                    &ingredients,
                    &instructions,
                    &split_tags(&tags),
                    non_empty(image_url),
                )
                .await;
                match result {
                    Ok(()) => println!("Recipe created!"),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "edit" => {
                let Some(details) = open_recipe.as_mut() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                let edit = RecipeEdit {
                    title: non_empty(prompt("New title (blank keeps current): ")?),
                    ingredients: non_empty(prompt("New ingredients (blank keeps current): ")?),
                    instructions: non_empty(prompt("New instructions (blank keeps current): ")?),
                    dietary_tags: non_empty(prompt("New tags (blank keeps current): ")?)
                        .map(|tags| split_tags(&tags)),
                    image_url: non_empty(prompt("New image URL (blank keeps current): ")?),
                };
                match details.edit_recipe(client, edit).await {
                    Ok(()) => print_details(details),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "delete" => {
                let Some(details) = open_recipe.as_ref() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                let result = details.delete_recipe(client).await;
                match result {
                    Ok(()) => {
                        open_recipe = None;
                        println!("Recipe deleted.");
                    }
                    Err(error) => println!("{}", error.user_message()),
                }
            }

            // ----------------- Comments & Favorites -----------------
            "comment" => {
                let Some(details) = open_recipe.as_mut() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                match details.add_comment(client, &rest.join(" ")).await {
                    Ok(()) => print_details(details),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "editc" => {
                let Some(details) = open_recipe.as_mut() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                let Some(comment_id) = rest.first().and_then(|raw| raw.parse::<i64>().ok()) else {
                    println!("Usage: editc <comment-id> <new text>");
                    continue;
                };
                match details
                    .edit_comment(client, comment_id, &rest[1..].join(" "))
                    .await
                {
                    Ok(()) => print_details(details),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "delc" => {
                let Some(details) = open_recipe.as_mut() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                let Some(comment_id) = rest.first().and_then(|raw| raw.parse::<i64>().ok()) else {
                    println!("Usage: delc <comment-id>");
                    continue;
                };
                match details.delete_comment(client, comment_id).await {
                    Ok(()) => print_details(details),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "fav" => {
                let Some(details) = open_recipe.as_mut() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                match details.add_favorite(client).await {
                    Ok(()) => println!("Favorites: {}", details.recipe.favorites_count),
                    Err(error) => println!("{}", error.user_message()),
                }
            }
            "unfav" => {
                let Some(details) = open_recipe.as_mut() else {
                    println!("Open a recipe first with 'open <id>'.");
                    continue;
                };
                match details.remove_favorite(client).await {
                    Ok(()) => println!("Favorites: {}", details.recipe.favorites_count),
                    Err(error) => println!("{}", error.user_message()),
                }
            }

            _ => println!("Unknown command '{command}'. Type 'help' for commands."),
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        // EOF behaves like an empty answer; the main loop exits via 'quit'.
        return Ok(String::new());
    }
    Ok(line.trim().to_string())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn print_help() {
    println!("  login <email> <password>     log in");
    println!("  signup <user> <email> <pw>   create an account");
    println!("  logout                       end the session");
    println!("  profile                      show your profile and favorites");
    println!("  update                       edit your profile");
    println!("  feed                         fetch and list all recipes");
    println!("  search <text>                filter the feed by title or tag");
    println!("  open <id>                    open a recipe's details");
    println!("  new                          create a recipe");
    println!("  edit / delete                edit or delete the open recipe");
    println!("  comment <text>               comment on the open recipe");
    println!("  editc <id> <text>            edit one of your comments");
    println!("  delc <id>                    delete one of your comments");
    println!("  fav / unfav                  toggle the open recipe as favorite");
    println!("  quit                         exit");
}

fn print_profile(profile: &Profile) {
    println!("Hello {}, here's your profile!", profile.user.username);
    println!("Email: {}", profile.user.email);
    if profile.favorites().is_empty() {
        println!("You have no favorite recipes yet.");
        return;
    }
    println!("Your favorites:");
    for favorite in profile.favorites() {
        println!("  #{} {}", favorite.id, favorite.title);
    }
}

fn print_feed(feed: &Feed) {
    if feed.visible().is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in feed.visible() {
        let tags = if recipe.dietary_tags.is_empty() {
            "None".to_string()
        } else {
            recipe.dietary_tags.join(", ")
        };
        println!(
            "  #{} {} [{}] ({} favorites)",
            recipe.id, recipe.title, tags, recipe.favorites_count
        );
    }
}

fn print_details(details: &RecipeDetails) {
    let recipe = &details.recipe;
    println!("#{} {} (by {})", recipe.id, recipe.title, recipe.owner_username);
    println!("Ingredients: {}", recipe.ingredients);
    println!("Instructions: {}", recipe.instructions);
    if recipe.dietary_tags.is_empty() {
        println!("No dietary tags");
    } else {
        println!("Tags: {}", recipe.dietary_tags.join(", "));
    }
    let yours = if details.is_favorite { " (including you)" } else { "" };
    println!("Favorites: {}{yours}", recipe.favorites_count);
    if let Some(image_url) = &recipe.image_url {
        println!("Image: {image_url}");
    }
    if details.comments.is_empty() {
        println!("No comments yet. Be the first to comment!");
        return;
    }
    println!("Comments:");
    for comment in &details.comments {
        let edited = if comment.is_edited() { " (edited)" } else { "" };
        println!(
            "  [{}] {}: {}{edited}",
            comment.id, comment.username, comment.content
        );
    }
}
