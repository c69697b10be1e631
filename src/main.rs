use tracing::{error, info, Level};

use cgc_etl::{
    configuration::{
        get_configuration, set_configuration, AppState, Config, State,
    },
    dao::{DatabasePool, GoogleSheets},
    error::Error,
    handler::{merge_init, processed},
    provider::HTTP,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let (config, database) = match init().await {
        Ok((config, database)) => (config, database),
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let http = HTTP::new(config.clone())?;
    let gsheet = config.gsheet.clone().map(GoogleSheets::new);

    let state = State::new(config, database, http, gsheet);
    let app_state = AppState::new(state);

    let merged = merge_init::run(&app_state).await?;
    processed::run(&app_state, &merged).await?;

    info!("pipeline finished");

    Ok(())
}

async fn init() -> Result<(Config, DatabasePool), Error> {
    set_configuration()?;
    let config = get_configuration()?;
    let database = DatabasePool::new(&config).await?;
    Ok((config, database))
}
