use reelsbook::app::{self, config, paths, persisted_state, Flags, Ports};
use reelsbook::domain::Session;
use reelsbook::infrastructure::http::{CdnUploader, HttpSessionGateway, HttpVideoCatalog};
use pico_args;
use std::sync::Arc;
use std::time::Duration;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        api_url: args.opt_value_from_str("--api-url").unwrap(),
    };

    // Directory overrides must land before anything resolves a path.
    paths::init_cli_overrides(
        args.opt_value_from_str("--data-dir").unwrap(),
        args.opt_value_from_str("--config-dir").unwrap(),
    );

    let (config, _warning) = config::load();
    let (state, _warning) = persisted_state::AppState::load();

    let base_url = flags
        .api_url
        .clone()
        .unwrap_or_else(|| config.backend_base_url());
    let timeout = Duration::from_secs(config.request_timeout_secs());
    let session = state.account_email.as_deref().map(Session::new);

    let ports = Ports {
        session: Arc::new(
            HttpSessionGateway::new(&base_url, timeout, session)
                .expect("failed to initialise the session client"),
        ),
        uploader: Arc::new(
            CdnUploader::new(&base_url, config.upload_chunk_bytes())
                .expect("failed to initialise the upload client"),
        ),
        catalog: Arc::new(
            HttpVideoCatalog::new(&base_url, timeout, None)
                .expect("failed to initialise the catalog client"),
        ),
    };

    app::run(flags, ports)
}
