use anyhow::Context;
use comments_api::{Avatar, CommentId, SeedComment, SeedDocument, User};
use rand::{seq::SliceRandom, Rng};

const USERNAMES: [&str; 4] = ["amyrobson", "maxblagun", "ramsesmiron", "juliusomo"];
const CURRENT_USER: &str = "juliusomo";

const MAX_SCORE: u32 = 15;
const MIN_WORDS: usize = 5;
const MAX_WORDS: usize = 40;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Number of top-level comments
    #[structopt(short, long, default_value = "4")]
    comments: usize,

    /// Maximum number of replies under each top-level comment
    #[structopt(short, long, default_value = "3")]
    max_replies: usize,

    /// Write the document there instead of stdout
    #[structopt(short, long)]
    output: Option<std::path::PathBuf>,
}

fn user(name: &str) -> User {
    User {
        username: String::from(name),
        image: Avatar {
            png: format!("./images/avatars/image-{name}.png"),
            webp: Some(format!("./images/avatars/image-{name}.webp")),
        },
    }
}

fn gen_user(rng: &mut impl Rng) -> User {
    user(USERNAMES.choose(rng).expect("no usernames to pick from"))
}

fn gen_content(rng: &mut impl Rng) -> String {
    lipsum::lipsum_words(rng.gen_range(MIN_WORDS..=MAX_WORDS))
}

fn main() -> anyhow::Result<()> {
    let opt = <Opt as structopt::StructOpt>::from_args();
    let mut rng = rand::thread_rng();

    let mut next_id = 1;
    let mut gen_id = || {
        let id = CommentId(next_id);
        next_id += 1;
        id
    };

    let mut comments = Vec::with_capacity(opt.comments);
    for _ in 0..opt.comments {
        let author = gen_user(&mut rng);
        let id = gen_id();

        // Replies answer either the top-level comment or one of the previous replies
        let mut replies: Vec<SeedComment> = Vec::new();
        for _ in 0..rng.gen_range(0..=opt.max_replies) {
            let replying_to = match replies.choose(&mut rng) {
                Some(r) if rng.gen_bool(0.5) => r.user.username.clone(),
                _ => author.username.clone(),
            };
            replies.push(SeedComment {
                id: gen_id(),
                content: gen_content(&mut rng),
                score: rng.gen_range(0..=MAX_SCORE),
                user: gen_user(&mut rng),
                replies: Vec::new(),
                replying_to: Some(replying_to),
            });
        }

        comments.push(SeedComment {
            id,
            content: gen_content(&mut rng),
            score: rng.gen_range(0..=MAX_SCORE),
            user: author,
            replies,
            replying_to: None,
        });
    }

    let doc = SeedDocument {
        current_user: user(CURRENT_USER),
        comments,
    };
    let json = serde_json::to_string_pretty(&doc).context("serializing seed document")?;
    match opt.output {
        None => println!("{json}"),
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("writing seed document to {}", path.display()))?,
    }
    Ok(())
}
