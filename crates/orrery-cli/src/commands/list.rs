use std::path::Path;

use anyhow::Result;

use orrery_core::post::load_universe;

pub fn run(universe: &Path) -> Result<()> {
    let posts = load_universe(universe)?;

    if posts.is_empty() {
        println!("No posts found in {}", universe.display());
        return Ok(());
    }

    println!("{} posts in {}\n", posts.len(), universe.display());
    for (index, post) in posts.iter().enumerate() {
        println!("{:3}. {} ({} lines)", index + 1, post.title, post.body.len());
    }

    Ok(())
}
