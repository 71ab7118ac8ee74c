//! Command parser for the terminal driver
//!
//! Parses text commands like "like 2" or "replies 1" into intents against
//! the page currently on screen. Card numbers are the `[n]` labels printed
//! next to each post.

use talkgallery_client::app::{ClickTarget, ComposeForm, Intent, NavItem, ScrollMetrics};
use talkgallery_client::domain::entities::UserId;
use talkgallery_client::view::{PageView, PostCard};

/// Command parsing errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for command: {0}")]
    MissingArgument(String),

    #[error("No post [{0}] on screen")]
    NoSuchCard(usize),
}

/// Commands understood by the driver
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Home,
    /// "← ホームに戻る"
    Back,
    Tag(String),
    User {
        id: UserId,
        name: Option<String>,
    },
    /// Open the author of card N
    Author { card: usize },
    /// Click the body of card N
    Replies { card: usize },
    Favorites,
    Profile,
    /// Scroll to the bottom of the list
    More,
    Like { card: usize },
    Delete { card: usize },
    Confirm,
    Cancel,
    Post {
        url: String,
        content: String,
        tags: String,
    },
    Reply { card: usize, content: String },
    /// Show the popular tags only
    Tags,
    Help,
    Quit,
}

/// Parse a command from a line of input
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();

    match command.as_str() {
        "home" => Ok(Command::Home),
        "back" => Ok(Command::Back),
        "favorites" | "favs" => Ok(Command::Favorites),
        "profile" | "me" => Ok(Command::Profile),
        "more" | "next" => Ok(Command::More),
        "confirm" | "yes" => Ok(Command::Confirm),
        "cancel" | "no" => Ok(Command::Cancel),
        "tags" => Ok(Command::Tags),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),

        "tag" => {
            // Tag names may contain spaces; take the rest of the line
            let name = input[parts[0].len()..].trim();
            let name = name.strip_prefix('#').unwrap_or(name).trim();
            if name.is_empty() {
                return Err(missing("tag"));
            }
            Ok(Command::Tag(name.to_string()))
        }

        "user" => {
            let raw = parts.get(1).ok_or_else(|| missing("user"))?;
            let id: UserId = raw.parse().map_err(|_| {
                ParseError::InvalidArgument(format!("'{}' is not a valid user id", raw))
            })?;
            let name = (parts.len() > 2).then(|| parts[2..].join(" "));
            Ok(Command::User { id, name })
        }

        "author" => Ok(Command::Author {
            card: card_index("author", &parts)?,
        }),
        "replies" | "open" => Ok(Command::Replies {
            card: card_index("replies", &parts)?,
        }),
        "like" | "fav" => Ok(Command::Like {
            card: card_index("like", &parts)?,
        }),
        "delete" | "rm" => Ok(Command::Delete {
            card: card_index("delete", &parts)?,
        }),

        "post" => {
            // post <url> <content...> [| tag, tag]
            let rest = input[parts[0].len()..].trim();
            let (body, tags) = match rest.split_once('|') {
                Some((body, tags)) => (body.trim(), tags.trim()),
                None => (rest, ""),
            };
            let (url, content) = body
                .split_once(char::is_whitespace)
                .map(|(url, content)| (url, content.trim()))
                .unwrap_or((body, ""));
            if url.is_empty() || content.is_empty() {
                return Err(ParseError::MissingArgument(
                    "post (usage: post <url> <content> [| tag, tag])".to_string(),
                ));
            }
            Ok(Command::Post {
                url: url.to_string(),
                content: content.to_string(),
                tags: tags.to_string(),
            })
        }

        "reply" => {
            let card = card_index("reply", &parts)?;
            if parts.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "reply (usage: reply <n> <content>)".to_string(),
                ));
            }
            Ok(Command::Reply {
                card,
                content: parts[2..].join(" "),
            })
        }

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

fn missing(command: &str) -> ParseError {
    ParseError::MissingArgument(command.to_string())
}

/// 1-based card number from the second word, returned 0-based
fn card_index(command: &str, parts: &[&str]) -> Result<usize, ParseError> {
    let raw = parts.get(1).ok_or_else(|| missing(command))?;
    let index: usize = raw
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .map_err(|_| ParseError::InvalidArgument(format!("'{}' is not a valid number", raw)))?;
    if index == 0 {
        return Err(ParseError::InvalidArgument(
            "index must be 1 or greater".to_string(),
        ));
    }
    Ok(index - 1)
}

impl Command {
    /// Intents for this command against the page on screen
    ///
    /// Commands handled by the driver itself (help, tags, quit) yield none.
    pub fn intents(&self, page: &PageView) -> Result<Vec<Intent>, ParseError> {
        let intents = match self {
            Command::Home => vec![Intent::Navigate(NavItem::Home)],
            Command::Back => vec![Intent::BackToHome],
            Command::Tag(name) => vec![Intent::SelectTagName(name.clone())],
            Command::User { id, name } => vec![Intent::SelectUser {
                id: *id,
                name: name.clone().unwrap_or_else(|| id.to_string()),
            }],
            Command::Author { card } => vec![card_at(page, *card)?.on_author_click.clone()],
            Command::Replies { card } => card_at(page, *card)?
                .click(ClickTarget::Body)
                .into_iter()
                .collect(),
            Command::Favorites => vec![Intent::Navigate(NavItem::Favorites)],
            Command::Profile => vec![Intent::Navigate(NavItem::Profile)],
            Command::More => vec![Intent::Scrolled(ScrollMetrics::at_bottom())],
            Command::Like { card } => vec![card_at(page, *card)?.on_like_click()],
            Command::Delete { card } => {
                let card_view = card_at(page, *card)?;
                let intent = card_view.on_delete_click().ok_or_else(|| {
                    ParseError::InvalidArgument(format!("post [{}] is not yours", card + 1))
                })?;
                vec![intent]
            }
            Command::Confirm => vec![Intent::ConfirmDelete],
            Command::Cancel => vec![Intent::CancelDelete, Intent::CloseCompose],
            Command::Post { url, content, tags } => vec![
                Intent::OpenCompose,
                Intent::SubmitCompose(ComposeForm {
                    content: content.clone(),
                    url: url.clone(),
                    tags: tags.clone(),
                }),
            ],
            Command::Reply { card, content } => vec![
                card_at(page, *card)?.on_reply_click(),
                Intent::SubmitCompose(ComposeForm {
                    content: content.clone(),
                    url: String::new(),
                    tags: String::new(),
                }),
            ],
            Command::Tags | Command::Help | Command::Quit => Vec::new(),
        };
        Ok(intents)
    }
}

fn card_at(page: &PageView, index: usize) -> Result<&PostCard, ParseError> {
    page.cards
        .get(index)
        .ok_or(ParseError::NoSuchCard(index + 1))
}

/// Get help text
pub fn help_text() -> String {
    r#"# Available Commands

## Browse
- `home` - Show the home timeline
- `back` - Return to the home timeline
- `tag <name>` - Show posts tagged <name>
- `user <id> [name]` - Show posts by a user
- `author N` - Show posts by the author of post N
- `replies N` - Show replies to post N
- `favorites` - Show your favorites
- `profile` - Show your own posts
- `more` - Load the next page
- `tags` - Show popular tags

## Act
- `like N` - Toggle favorite on post N
- `post <url> <content> [| tag, tag]` - Share a new conversation
- `reply N <content>` - Reply to post N
- `delete N` - Delete your post N (asks for confirmation)
- `confirm` / `cancel` - Answer the confirmation

## Help
- `help` - Show this help message
- `quit` - Exit

---
Numbers in the feed (e.g., [1], [2]) can be used with commands.
"#
    .to_string()
}
