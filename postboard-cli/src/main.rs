use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use postboard_client::{
    HttpPostService, PostBoard, PostComposer, PostDraft, PostService, SubmitOutcome,
};
use tracing::info;

mod logging;
mod render;
mod settings;

use logging::init_logging;
use render::{render_board, render_field_errors};
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "Лента постов блога")]
struct Cli {
    /// Адрес бэкенда (перекрывает POSTBOARD_API_URL).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список постов.
    List {
        /// Вывести посты в JSON.
        #[arg(long)]
        json: bool,
    },
    /// Создание поста из аргументов.
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long, default_value = "")]
        author: String,
    },
    /// Интерактивная форма создания поста.
    ///
    /// После неудачной отправки поля сохраняются: пустой ввод оставляет
    /// прежнее значение.
    Compose,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;

    let config = settings.http_config(cli.server);
    let service = HttpPostService::new(config).context("не удалось создать HTTP-клиент")?;
    info!(server = service.base_url(), "using backend");
    let board = PostBoard::new(service);

    match cli.command {
        Command::List { json } => {
            if !board.load().await {
                bail!("не удалось загрузить посты (подробности в логе)");
            }
            if json {
                let raw = serde_json::to_string_pretty(&board.posts())
                    .context("не удалось сериализовать посты")?;
                println!("{raw}");
            } else {
                println!("{}", render_board(&board.posts()));
            }
        }
        Command::Create {
            title,
            body,
            author,
        } => {
            let draft = PostDraft::new(title, body, author);
            create(&board, draft, &mut io::stdout(), &mut io::stderr()).await?;
        }
        Command::Compose => {
            board.load().await;
            let stdin = io::stdin();
            let stdout = io::stdout();
            compose(&board, &mut stdin.lock(), &mut stdout.lock()).await?;
        }
    }

    Ok(())
}

/// Одна попытка создать пост из готовых значений, без повторов.
async fn create<S, O, E>(
    board: &PostBoard<S>,
    draft: PostDraft,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    S: PostService,
    O: Write,
    E: Write,
{
    let mut composer = PostComposer::new();
    composer.open();
    *composer.draft_mut() = draft;

    match composer.submit(board).await {
        Ok(SubmitOutcome::Created) => {
            writeln!(out, "Пост создан\n")?;
            writeln!(out, "{}", render_board(&board.posts()))?;
            Ok(())
        }
        Err(_) => {
            write!(err, "{}", render_field_errors(&composer))?;
            bail!("форма заполнена не полностью");
        }
        Ok(SubmitOutcome::Failed | SubmitOutcome::AlreadyPending) => {
            bail!("не удалось создать пост (подробности в логе)");
        }
    }
}

async fn compose<S, R, W>(board: &PostBoard<S>, input: &mut R, output: &mut W) -> Result<()>
where
    S: PostService,
    R: BufRead,
    W: Write,
{
    let mut composer = PostComposer::new();
    composer.open();

    while composer.is_open() {
        fill_draft(input, output, composer.draft_mut())?;

        match composer.submit(board).await {
            Ok(SubmitOutcome::Created) => {
                writeln!(output, "Пост создан\n")?;
                writeln!(output, "{}", render_board(&board.posts()))?;
            }
            Err(_) => {
                write!(output, "{}", render_field_errors(&composer))?;
            }
            Ok(SubmitOutcome::Failed | SubmitOutcome::AlreadyPending) => {
                writeln!(output, "Не удалось создать пост, введённые значения сохранены.")?;
                if !confirm(input, output, "Повторить? [Y/n] ")? {
                    composer.close();
                    bail!("пост не создан");
                }
            }
        }
    }

    Ok(())
}

fn fill_draft<R: BufRead, W: Write>(input: &mut R, output: &mut W, draft: &mut PostDraft) -> Result<()> {
    draft.title = prompt_field(input, output, "Title", &draft.title)?;
    draft.body = prompt_field(input, output, "Body", &draft.body)?;
    draft.author = prompt_field(input, output, "Author", &draft.author)?;
    Ok(())
}

/// Пустая строка оставляет `current`.
fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    if current.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{current}]: ")?;
    }
    output.flush()?;

    let line = read_line(input)?;
    if line.is_empty() {
        return Ok(current.to_string());
    }
    Ok(line)
}

fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{question}")?;
    output.flush()?;

    let answer = read_line(input)?.to_lowercase();
    Ok(matches!(answer.as_str(), "" | "y" | "yes" | "д" | "да"))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("не удалось прочитать ввод")?;
    if read == 0 {
        return Err(anyhow!("ввод закончился"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
