use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};

use crate::config::AppConfig;
use crate::database::{self, setup::Schema, DbPool, Post};
use crate::errors::StoreResult;
use crate::sanitize::Sanitizer;

/// Posts of the discussion forum
#[derive(Clone)]
pub struct ForumStore {
    pool: DbPool,
    sanitizer: Arc<Sanitizer>,
}

impl ForumStore {
    pub fn new(pool: DbPool, sanitizer: Arc<Sanitizer>) -> Self {
        Self { pool, sanitizer }
    }

    pub fn open(config: &AppConfig, sanitizer: Arc<Sanitizer>) -> Result<Self> {
        let pool = database::create_pool(&config.database.forum_path, &config.database)?;
        Ok(Self::new(pool, sanitizer))
    }

    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = database::get_connection(&self.pool)?;
        database::setup::apply_schema(&conn, Schema::Forum)?;
        Ok(())
    }

    /// All posts, newest first, with content cleaned again on the way out
    pub fn get_posts(&self) -> StoreResult<Vec<Post>> {
        let conn = database::get_connection(&self.pool)?;
        let posts = database::posts::list_recent(&conn)?;
        debug!("Fetched {} posts", posts.len());

        Ok(posts
            .into_iter()
            .map(|post| Post {
                content: self.sanitizer.clean(&post.content),
                ..post
            })
            .collect())
    }

    pub fn add_post(&self, content: &str) -> StoreResult<Post> {
        let content = self.sanitizer.clean(content);
        let conn = database::get_connection(&self.pool)?;
        let post = database::posts::insert_post(&conn, &content)?;
        info!("Added post {}", post.id);
        Ok(post)
    }
}
