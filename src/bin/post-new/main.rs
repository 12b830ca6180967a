use std::fmt::Write;
use std::fs::File;

use chrono::Utc;
use clap::Parser;

use inkdex::slug::slugify;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    author: Option<String>,

    #[arg(short, long)]
    title: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,

    /// Start the post as a draft
    #[arg(short, long)]
    draft: bool,

    /// Write <slug>.md instead of printing to stdout
    #[arg(short, long)]
    file: bool,
}

fn get_author(args: &Args) -> String {
    if let Some(ref author) = args.author {
        return author.clone();
    }

    let name = whoami::realname();
    if name.is_empty() {
        return whoami::username();
    }
    name
}

fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.unwrap_or_default()
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn render_frontmatter(author: &str, date: &str, title: Option<&str>, tags: &[String], draft: bool) -> String {
    let title = title.unwrap_or("Replace with title");
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "author: {}", author);
    let _ = writeln!(&mut buf, "pubDatetime: {}", date);
    let _ = writeln!(&mut buf, "title: \"{}\"", title.replace('"', "\\\""));
    let _ = writeln!(&mut buf, "featured: false");
    let _ = writeln!(&mut buf, "draft: {}", draft);
    let _ = writeln!(&mut buf, "tags: [{}]", tags.join(", "));
    let _ = writeln!(&mut buf, "description: \"\"");
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf);
    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");

    buf
}

fn main() {
    let args = Args::parse();

    let author = get_author(&args);
    let date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let tags = split_tags(args.tags.as_deref());

    if args.file && args.title.is_none() {
        eprintln!("For file output, title is required");
        return;
    }

    let header = render_frontmatter(&author, &date, args.title.as_deref(), &tags, args.draft);
    let body = render_body();

    if args.file {
        use std::io::Write;
        let file_name = format!("{}.md", slugify(args.title.as_deref().unwrap()));
        println!("Creating file {}", file_name);
        let mut file = File::create(&file_name).unwrap();
        file.write_all(header.as_bytes()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    } else {
        println!("{}", header);
        println!("{}", body);
    }
}
