// Handlers for `webutil remove` and `webutil remove-folder`.
// Every path is removed on the blocking pool at the same time; results come back in argument order.
use files::{remove_async, remove_folder_async, Removal, Remover};
use std::path::PathBuf;
use tokio::task::JoinSet;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    File,
    Folder,
}

pub async fn run(paths: &[PathBuf], target: Target, remover: Remover) -> Vec<(PathBuf, Removal)> {
    let mut tasks = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        tasks.spawn(async move {
            let outcome = match target {
                Target::File => remove_async(path, remover).await,
                Target::Folder => remove_folder_async(path, remover).await,
            };
            (index, outcome)
        });
    }

    let mut finished = Vec::with_capacity(paths.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => finished.push(result),
            Err(e) => error!(error = %e, "Removal task did not complete"),
        }
    }

    let results = in_argument_order(paths, finished);
    let removed = results.iter().filter(|(_, r)| r.is_removed()).count();
    info!(requested = paths.len(), removed, "Removal finished");
    results
}

/// Pairs every path with its outcome. A path whose task never reported is `Failed`.
fn in_argument_order(paths: &[PathBuf], finished: Vec<(usize, Removal)>) -> Vec<(PathBuf, Removal)> {
    let mut slots: Vec<Option<Removal>> = vec![None; paths.len()];
    for (index, outcome) in finished {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(outcome);
        }
    }
    paths
        .iter()
        .cloned()
        .zip(slots)
        .map(|(path, outcome)| {
            let outcome = outcome.unwrap_or_else(|| {
                error!(path = %path.display(), "No removal outcome, reporting failure");
                Removal::Failed
            });
            (path, outcome)
        })
        .collect()
}
