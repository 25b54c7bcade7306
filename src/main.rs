use clap::builder::{RangedI64ValueParser, TypedValueParser};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use versegrep::corpus::{books_in, Testament, BOOKS};
use versegrep::error::VerseError;
use versegrep::output::{
    BookEntry, BooksResponse, ErrorResponse, OutputFormat, ParseResponse,
    ResolveResponse, SearchResponse, TranslationStatus, TranslationsResponse, VerseMatch,
};
use versegrep::output_common::{format_total_header, render_envelope, search_footer};
use versegrep::{
    book_by_id, parse_query, resolve_book, resolve_detailed, DirectoryProvider, Resolution,
    SearchScope, TranslationProvider, DEFAULT_TRANSLATION_CODE, MAX_KEYWORD_RESULTS, TRANSLATIONS,
};

// Custom value parser for ranged usize - needed because clap doesn't provide RangedUsizeValueParser
fn ranged_usize(min: i64, max: i64) -> impl TypedValueParser<Value = usize> {
    let inner = RangedI64ValueParser::new().range(min..=max);
    // Map i64 to usize - this is safe because the range ensures valid values
    inner.map(|v: i64| v as usize)
}

#[derive(Parser)]
#[command(
    name = "versegrep",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find Bible verses by reference, book abbreviation or keyword"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = OutputFormat::Human)]
    output: OutputFormat,

    /// Directory holding <code>.json translation files
    #[arg(long, global = true, env = "VERSEGREP_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Translation code to search
    #[arg(long, global = true, env = "VERSEGREP_TRANSLATION", default_value = DEFAULT_TRANSLATION_CODE)]
    translation: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a translation with a reference or keyword query
    #[command(after_help = SEARCH_EXAMPLES)]
    Search {
        #[arg(long)]
        query: String,

        /// Keyword scope: all, old, new, a book id or a book name
        #[arg(long, default_value = "all")]
        scope: SearchScope,

        /// Maximum results to print (display only)
        #[arg(long, default_value_t = MAX_KEYWORD_RESULTS, value_parser = ranged_usize(1, MAX_KEYWORD_RESULTS as i64))]
        limit: usize,
    },
    /// Show how a query is classified, without loading any translation
    Parse {
        #[arg(long)]
        query: String,
    },
    /// List the books of the canon
    Books {
        #[arg(long)]
        testament: Option<TestamentArg>,
    },
    /// Resolve a book name, abbreviation or chosung token
    Resolve {
        #[arg(long)]
        token: String,
    },
    /// List known translations and whether their data is present
    Translations,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TestamentArg {
    Old,
    New,
}

impl From<TestamentArg> for Testament {
    fn from(arg: TestamentArg) -> Self {
        match arg {
            TestamentArg::Old => Testament::Old,
            TestamentArg::New => Testament::New,
        }
    }
}

const SEARCH_EXAMPLES: &str = r#"
EXAMPLES:
  # Single verse, verse range, cross-chapter range
  versegrep search --query "창 1:1"
  versegrep search --query "창 1:1-10"
  versegrep search --query "창1:2-2:2"

  # Chapter, chapter range, whole book (full name, abbreviation or chosung)
  versegrep search --query "창세기 1장"
  versegrep search --query "창 1-3"
  versegrep search --query "ㄹㅁㅅ"

  # Keyword search limited to the New Testament or one book
  versegrep search --query "사랑" --scope new
  versegrep search --query "사랑" --scope 요한일서

  # Another translation, JSON output
  versegrep --translation kov search --query "요 3:16" --output json
"#;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = dispatch(&cli) {
        emit_error(&cli, &err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERSEGREP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), VerseError> {
    match &cli.command {
        Command::Search {
            query,
            scope,
            limit,
        } => run_search(cli, query, *scope, *limit),
        Command::Parse { query } => run_parse(cli, query),
        Command::Books { testament } => run_books(cli, *testament),
        Command::Resolve { token } => run_resolve(cli, token),
        Command::Translations => run_translations(cli),
    }
}

fn run_search(cli: &Cli, query: &str, scope: SearchScope, limit: usize) -> Result<(), VerseError> {
    let provider = DirectoryProvider::open(&cli.data_dir)?;
    let bible = provider.load(&cli.translation)?;

    let parsed = parse_query(query);
    let Resolution {
        results,
        stopped_early,
    } = resolve_detailed(&bible, &parsed, scope);
    let total = results.len();
    tracing::debug!(mode = parsed.mode(), total, stopped_early, "search finished");

    let response = SearchResponse {
        query: query.to_string(),
        parsed,
        scope,
        translation: bible.code.clone(),
        results: results
            .into_iter()
            .take(limit)
            .map(|r| VerseMatch::from_result(&bible.code, r))
            .collect(),
        total_count: total as u64,
    };
    output_search(cli, response, stopped_early)
}

fn run_parse(cli: &Cli, query: &str) -> Result<(), VerseError> {
    let response = ParseResponse {
        query: query.to_string(),
        parsed: parse_query(query),
    };
    if cli.output.is_json() {
        println!("{}", render_envelope(&response, false, cli.output)?);
        return Ok(());
    }
    let detail = serde_json::to_string(&response.parsed)?;
    println!("{} {}", response.parsed.mode(), detail);
    Ok(())
}

fn run_books(cli: &Cli, testament: Option<TestamentArg>) -> Result<(), VerseError> {
    let books: Vec<BookEntry> = match testament {
        Some(t) => books_in(t.into()).map(BookEntry::from).collect(),
        None => BOOKS.iter().map(BookEntry::from).collect(),
    };
    let response = BooksResponse {
        total_count: books.len() as u64,
        books,
    };
    if cli.output.is_json() {
        println!("{}", render_envelope(&response, false, cli.output)?);
        return Ok(());
    }
    println!("{}", format_total_header(response.total_count));
    for book in &response.books {
        println!(
            "{:>2} {} ({}, {}) chapters={}",
            book.id, book.name, book.abbr, book.chosung, book.chapters
        );
    }
    Ok(())
}

fn run_resolve(cli: &Cli, token: &str) -> Result<(), VerseError> {
    let book = resolve_book(token.trim())
        .and_then(book_by_id)
        .map(BookEntry::from);
    let response = ResolveResponse {
        token: token.to_string(),
        book,
    };
    if cli.output.is_json() {
        println!("{}", render_envelope(&response, false, cli.output)?);
        return Ok(());
    }
    match &response.book {
        Some(book) => println!("{} {}", book.id, book.name),
        None => println!("no book matches '{}'", response.token),
    }
    Ok(())
}

fn run_translations(cli: &Cli) -> Result<(), VerseError> {
    let provider = DirectoryProvider::new(&cli.data_dir);
    let response = TranslationsResponse {
        data_dir: provider.root().display().to_string(),
        translations: TRANSLATIONS
            .iter()
            .map(|t| TranslationStatus {
                code: t.code,
                name: t.name,
                default: t.code == DEFAULT_TRANSLATION_CODE,
                available: provider.is_available(t.code),
            })
            .collect(),
    };
    if cli.output.is_json() {
        println!("{}", render_envelope(&response, false, cli.output)?);
        return Ok(());
    }
    for t in &response.translations {
        println!(
            "{:<5} {}{}{}",
            t.code,
            t.name,
            if t.default { " (default)" } else { "" },
            if t.available { "" } else { " [missing]" }
        );
    }
    Ok(())
}

fn output_search(cli: &Cli, response: SearchResponse, partial: bool) -> Result<(), VerseError> {
    match cli.output {
        OutputFormat::Human => {
            println!("{}", format_total_header(response.total_count));
            for item in &response.results {
                println!("{} {}", item.reference, item.text);
            }
            for line in search_footer(response.results.len(), response.total_count, partial) {
                println!("{}", line);
            }
        }
        OutputFormat::Json | OutputFormat::Pretty => {
            println!("{}", render_envelope(&response, partial, cli.output)?);
        }
    }
    Ok(())
}

fn emit_error(cli: &Cli, err: &VerseError) {
    match cli.output {
        OutputFormat::Human => {
            eprintln!("ERROR [{}]: {}", err.error_code(), err);
            if let Some(hint) = err.remediation() {
                eprintln!("Hint: {}", hint);
            }
        }
        OutputFormat::Json | OutputFormat::Pretty => {
            let error = ErrorResponse {
                code: err.error_code().to_string(),
                error: err.severity().to_string(),
                message: err.to_string(),
                remediation: err.remediation().map(|s| s.to_string()),
            };
            match render_envelope(&error, false, cli.output) {
                Ok(payload) => println!("{}", payload),
                Err(ser_err) => eprintln!("ERROR: {}", ser_err),
            }
        }
    }
}
