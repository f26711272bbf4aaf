use forkify::{build_controller, AppConfig, Event, FileStore, HashLocation, UploadForm};
use log::debug;
use std::env;

mod terminal;

const USAGE: &str = "Usage:
  forkify search <query> [page]
  forkify show <id> [servings]
  forkify bookmark <id>
  forkify bookmarks
  forkify upload <field=value>...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).ok_or(USAGE)?;

    let config = AppConfig::load()?;
    let storage = FileStore::open(config.storage_dir())?;
    debug!("Bookmarks stored in {}", storage.dir().display());

    let mut controller = build_controller(
        &config,
        terminal::views(),
        Box::new(HashLocation::new()),
        Box::new(storage),
    )?;

    match command.as_str() {
        "search" => {
            let query = args.get(2).ok_or(USAGE)?;
            controller
                .dispatch(Event::Search {
                    query: query.clone(),
                })
                .await?;
            if let Some(page) = args.get(3) {
                let page = page.parse()?;
                controller.dispatch(Event::Paginate { page }).await?;
            }
        }
        "show" => {
            let id = args.get(2).ok_or(USAGE)?;
            controller.select_recipe(id).await?;
            if let Some(servings) = args.get(3) {
                let servings = servings.parse()?;
                controller
                    .dispatch(Event::UpdateServings { servings })
                    .await?;
            }
        }
        "bookmark" => {
            let id = args.get(2).ok_or(USAGE)?;
            controller.select_recipe(id).await?;
            controller.dispatch(Event::ToggleBookmark).await?;
        }
        "bookmarks" => controller.dispatch(Event::Load).await?,
        "upload" => {
            let form = args[2..]
                .iter()
                .filter_map(|arg| arg.split_once('='))
                .fold(UploadForm::new(), |form, (name, value)| form.field(name, value));
            controller.dispatch(Event::Upload(form)).await?;
            controller.settle().await;
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}
