mod dialog;
mod menu;
mod session;
mod views;

use dialog::SignInDialog;
use dioxus::prelude::*;
use menu::Page;
use session::Session;
use views::{Account, Admin, AdminTable, Home, Navbar, PageNotFound, Tickers};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/tickers")]
        Tickers {},
        #[route("/admin")]
        Admin {},
        #[route("/admin/:table")]
        AdminTable { table: String },
        #[route("/me")]
        Account {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Tickers => Route::Tickers {},
            Page::Admin => Route::Admin {},
            Page::Account => Route::Account {},
        }
    }
}

/// Root component: provides the session and the sign-in dialog to every view
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::Anonymous));
    use_context_provider(|| SignInDialog::new(Signal::new(false)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind, defaults to the one handed over by the Dioxus CLI
    #[arg(long)]
    ip: Option<String>,
    /// Port to bind, 0 keeps the one handed over by the Dioxus CLI
    #[arg(long, default_value_t = 0)]
    port: u16,
}

#[cfg(feature = "server")]
impl Args {
    fn socket_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        let default_addr = dioxus_cli_config::fullstack_address_or_localhost();
        let ip = match &self.ip {
            Some(ip) => ip.parse()?,
            None => default_addr.ip(),
        };
        let port = if self.port == 0 {
            default_addr.port()
        } else {
            self.port
        };
        Ok(std::net::SocketAddr::new(ip, port))
    }
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();
    let addr = args.socket_addr()?;

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        .into_make_service();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("MarketWatch listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
