use tracing::debug;

use super::{render_request, VariableStore};
use crate::collection::{Item, Result};

/// Render every example reachable from `items`, depth-first in document order.
///
/// For each item its own examples come first, then the contents of its nested
/// item list. An item carrying both is processed on both branches.
pub fn walk_items(items: &[Item<'_>], variables: &VariableStore) -> Result<Vec<String>> {
    let mut commands = Vec::new();
    walk_into(items, variables, &mut commands)?;
    Ok(commands)
}

fn walk_into(items: &[Item<'_>], variables: &VariableStore, commands: &mut Vec<String>) -> Result<()> {
    for item in items {
        if let Some(examples) = item.responses()? {
            debug!(
                location = item.location(),
                name = item.name().unwrap_or_default(),
                "Rendering {} example(s)",
                examples.len()
            );
            for example in &examples {
                let request = example.original_request()?;
                commands.push(render_request(&request, variables)?);
            }
        }

        if let Some(children) = item.children()? {
            walk_into(&children, variables, commands)?;
        }
    }

    Ok(())
}
