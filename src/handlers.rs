use std::sync::Arc;

use iron::headers::ContentType;
use iron::{status, Handler, IronResult, Request, Response};

use crate::config::RenderMode;
use crate::store::PostStore;
use crate::views;

/// Match a `Result` into its inner value or
/// return `500 Internal Server Error` with the error's message.
macro_rules! try_handler {
    ( $e:expr ) => {
        match $e {
            Ok(x) => x,
            Err(e) => return Ok(Response::with((status::InternalServerError, e.to_string()))),
        }
    };
}

fn html(body: String) -> Response {
    let mut res = Response::with((status::Ok, body));
    res.headers.set(ContentType::html());
    res
}

fn json(body: String) -> Response {
    let mut res = Response::with((status::Ok, body));
    res.headers.set(ContentType::json());
    res
}

pub struct Handlers {
    pub home: HomeHandler,
    pub about: AboutHandler,
    pub api_posts: ApiPostsHandler,
}

impl Handlers {
    pub fn new(store: PostStore, mode: RenderMode) -> Handlers {
        let store = Arc::new(store);
        Handlers {
            home: HomeHandler::new(store.clone(), mode),
            about: AboutHandler,
            api_posts: ApiPostsHandler::new(store),
        }
    }
}

/// Serves `/` and `/posts`.
#[derive(Clone)]
pub struct HomeHandler {
    store: Arc<PostStore>,
    mode: RenderMode,
}

impl HomeHandler {
    fn new(store: Arc<PostStore>, mode: RenderMode) -> HomeHandler {
        HomeHandler { store, mode }
    }
}

impl Handler for HomeHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let page = match self.mode {
            RenderMode::List => views::post_list_page("Home", self.store.all()),
            RenderMode::Single => views::headline(try_handler!(self.store.first())),
        };
        Ok(html(page))
    }
}

pub struct AboutHandler;

impl Handler for AboutHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        Ok(html(views::about_page()))
    }
}

pub struct ApiPostsHandler {
    store: Arc<PostStore>,
}

impl ApiPostsHandler {
    fn new(store: Arc<PostStore>) -> ApiPostsHandler {
        ApiPostsHandler { store }
    }
}

impl Handler for ApiPostsHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        let payload = try_handler!(serde_json::to_string(self.store.all()));
        Ok(json(payload))
    }
}
