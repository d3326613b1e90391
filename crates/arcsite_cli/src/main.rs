//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the full load/normalize/filter/render pipeline against a
//!   deployed site base URL and print the rendered card markup.
//! - Keep output deterministic for quick local sanity checks.

use arcsite_core::render::card;
use arcsite_core::{
    build_chips, collect_tags, filter, fragment_html, to_html, ArticleService, ContentPaths,
    Facet, Fetcher, SiteService, TeamService,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let base = args
        .next()
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());
    let query = args.next().unwrap_or_default();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            std::process::exit(1);
        }
    };

    std::process::exit(runtime.block_on(run(&base, &query)));
}

async fn run(base: &str, query: &str) -> i32 {
    println!("arcsite_core version={}", arcsite_core::core_version());

    let fetcher = match Fetcher::try_new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let paths = ContentPaths::new(base);

    let site = SiteService::new(fetcher.clone(), paths.clone())
        .load_site()
        .await;
    match site {
        Some(site) => println!(
            "site title={} tagline={}",
            site.title.as_deref().unwrap_or("-"),
            site.tagline.as_deref().unwrap_or("-")
        ),
        None => println!("site metadata unavailable"),
    }

    let articles = ArticleService::new(fetcher.clone(), paths.clone())
        .list_articles()
        .await;
    let tags = collect_tags(&articles);
    let chips = build_chips(&tags, &Facet::All);
    let visible = filter(&articles, query, &Facet::All);
    println!(
        "articles total={} matching={} tags={}",
        articles.len(),
        visible.len(),
        tags.len()
    );
    println!("{}", to_html(&card::chip_row(&chips)));
    if visible.is_empty() {
        println!("{}", to_html(&card::empty_state("No articles found", None)));
    }
    for article in visible {
        println!("{}", to_html(&card::article_card(article)));
    }

    let members = TeamService::new(fetcher, paths).list_members().await;
    println!("members total={}", members.len());
    if members.is_empty() {
        println!("{}", to_html(&card::empty_state("No members found", None)));
    }
    let member_cards: Vec<_> = members.iter().map(card::team_card).collect();
    println!("{}", fragment_html(&member_cards));

    0
}
