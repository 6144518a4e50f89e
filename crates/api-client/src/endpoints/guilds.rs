//! Guild leaderboard API endpoints
//!
//! Maps to the `guilds/{id}/rankings/...` paths:
//! - All-time ranking for a single guild member
//! - Paginated all-time rankings for a whole guild

use crate::client::TatsuClient;
use crate::endpoints::{opt_i64, opt_u64};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Guilds API interface
#[derive(Clone)]
pub struct GuildsApi {
    client: TatsuClient,
}

impl GuildsApi {
    /// Create a new guilds API interface
    pub(crate) fn new(client: TatsuClient) -> Self {
        Self { client }
    }

    /// Get the all-time ranking for a guild member
    ///
    /// GET `guilds/{guild_id}/rankings/members/{user_id}/all`
    pub async fn member_ranking(&self, guild_id: u64, user_id: u64) -> ApiResult<Ranking> {
        let value = self
            .client
            .request(&format!("guilds/{guild_id}/rankings/members/{user_id}/all"))
            .await?;
        Ok(map_ranking(&value))
    }

    /// Get a page of all-time rankings for a guild
    ///
    /// GET `guilds/{guild_id}/rankings/all?offset={offset}`
    ///
    /// `offset` selects the page start; pass 0 for the top of the
    /// leaderboard. Entries come back in the server's order, which is rank
    /// order.
    pub async fn rankings(&self, guild_id: u64, offset: u64) -> ApiResult<GuildRankings> {
        let value = self
            .client
            .request(&format!("guilds/{guild_id}/rankings/all?offset={offset}"))
            .await?;

        // An absent `rankings` key yields a single entry with every field
        // unset. The live API always sends the key; see DESIGN.md.
        let rankings = match value.get("rankings") {
            Some(Value::Array(entries)) => entries.iter().map(map_ranking).collect(),
            _ => vec![Ranking::default()],
        };

        Ok(GuildRankings {
            guild_id: opt_u64(&value, "guild_id"),
            rankings,
        })
    }
}

/// One leaderboard entry
///
/// All fields are optional: each one is a direct copy of the matching JSON
/// key, `None` when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ranking {
    /// Guild the ranking belongs to
    pub guild_id: Option<u64>,
    /// Position on the leaderboard (1 is the top)
    pub rank: Option<i64>,
    /// Score backing the position
    pub score: Option<i64>,
    /// Ranked user
    pub user_id: Option<u64>,
}

/// One page of a guild leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildRankings {
    /// Guild the page belongs to
    pub guild_id: Option<u64>,
    /// Entries in server order (rank order)
    pub rankings: Vec<Ranking>,
}

/// Field-by-field copy of a ranking object
fn map_ranking(value: &Value) -> Ranking {
    Ranking {
        guild_id: opt_u64(value, "guild_id"),
        rank: opt_i64(value, "rank"),
        score: opt_i64(value, "score"),
        user_id: opt_u64(value, "user_id"),
    }
}
