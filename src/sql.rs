//! SQL statements for the wiki store. All values are bound as parameters.

/// Wiki rows with their blocks aggregated as a JSON array ordered by block id.
/// `FILTER` drops the all-null row produced by the LEFT JOIN for block-less wikis.
const WIKI_WITH_BLOCKS: &str = r#"
SELECT wiki.id, wiki.slug, wiki.title, wiki.full_title, wiki.type,
    COALESCE(
        json_agg(
            json_build_object('id', block.id, 'title', block.title, 'content', block.content)
            ORDER BY block.id ASC
        ) FILTER (WHERE block.id IS NOT NULL),
        '[]'::json
    ) AS block
FROM wiki
LEFT JOIN block ON wiki.id = block.wiki_id
"#;

pub fn list_wikis() -> String {
    format!("{} GROUP BY wiki.id ORDER BY wiki.id ASC", WIKI_WITH_BLOCKS)
}

pub fn wiki_by_id() -> String {
    format!("{} WHERE wiki.id = $1 GROUP BY wiki.id", WIKI_WITH_BLOCKS)
}

pub const WIKI_RECORD_BY_ID: &str = "SELECT id, slug, title, full_title, type FROM wiki WHERE id = $1";

/// Params: slug, title, type, full_title.
pub const NEW_WIKI: &str = "SELECT new_wiki($1, $2, $3, $4) AS id";

/// Params: slug, title, type, id, full_title. Yields NULL when no wiki has that id.
pub const UPDATE_WIKI: &str = "SELECT update_wiki($1, $2, $3, $4, $5) AS id";

pub const DELETE_WIKI: &str = "DELETE FROM wiki WHERE id = $1 RETURNING id, slug, title, full_title, type";

pub const PING: &str = "SELECT 1";
