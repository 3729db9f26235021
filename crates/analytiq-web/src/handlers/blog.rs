//! `GET /blog` — every post from the blog entries file.

use analytiq_core::store::{ContactStore, SubscriptionStore};
use axum::{Json, extract::State};

use crate::{
  AppState,
  blog::{BlogPost, load_posts},
  error::Error,
};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<BlogPost>>, Error>
where
  S: SubscriptionStore + ContactStore + Clone + 'static,
{
  let posts = load_posts(&state.config.blog_entries_path).await?;
  Ok(Json(posts))
}
