use std::backtrace::Backtrace;

use rusqlite::Connection;

/// one-shot backfill of implicit tags for a store that predates the tag hooks.
///
/// Inside a single transaction this creates the `type:*` tags and links every chart, dashboard, and saved query
/// to its type tag, then creates an `owner:<id>` tag per distinct owner and links it to each owned object, then
/// does the same with `favorited_by:<id>` for every favorite. Links that already exist are left alone, so running
/// this twice has no effect
pub fn materialize_implicit_tags(con: &mut Connection) -> Result<(), rusqlite::Error> {
    log::info!("Materializing implicit tags for existing objects");
    let tx = con.transaction()?;
    let steps = [
        ("type", include_str!("../assets/queries/materialize/type_tags.sql")),
        ("owner", include_str!("../assets/queries/materialize/owner_tags.sql")),
        (
            "favorited_by",
            include_str!("../assets/queries/materialize/favorited_by_tags.sql"),
        ),
    ];
    for (tag_type, sql) in steps {
        if let Err(e) = tx.execute_batch(sql) {
            log::error!(
                "Failed to materialize {tag_type} tags, nothing was changed. Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            // dropping the transaction rolls it back
            return Err(e);
        }
    }
    tx.commit()?;
    log::info!("Finished materializing implicit tags");
    Ok(())
}
