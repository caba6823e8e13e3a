//! `openclaw todo` — Show the to-do lists.

use openclaw_store::{TodoStatus, TodoStore};

pub async fn run() -> anyhow::Result<()> {
    let store = TodoStore::new(openclaw_config::data_dir().join("todos.json"));
    let items = store.get_all()?;
    if items.is_empty() {
        println!("No lists or tasks yet. Ask the assistant to add some.");
        return Ok(());
    }

    for category in store.get_categories()? {
        let in_category: Vec<_> = items.iter().filter(|i| i.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        println!("== {category} ==");
        for item in in_category {
            let mark = match item.status {
                TodoStatus::Done => "[x]",
                TodoStatus::Pending => "[ ]",
            };
            println!("  {mark} {} | {}", item.id, item.text);
        }
        println!();
    }
    Ok(())
}
