use log::error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{Request, Response, uri};
use rocket_dyn_templates::{Template, context};
use thiserror::Error;

use crate::web::pages::rocket_uri_macro_index_page;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

// A query failure renders that view's error page; every other view keeps
// working against the shared context.
impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'o> {
        error!("{:#?}", self);

        let is_debug = req.rocket().config().profile == "debug";

        let rendered = Template::show(
            req.rocket(),
            "error",
            context! {
                index_url: uri!(index_page()),
                error_text: format!("{}", self),
                error_debug: if is_debug { Some(format!("{:?}", self)) } else { None },
            },
        );

        match rendered {
            Some(rendered) => Response::build()
                .status(Status::InternalServerError)
                .header(rocket::http::ContentType::HTML)
                .sized_body(rendered.len(), std::io::Cursor::new(rendered))
                .ok(),
            // The error template itself failed to render. Nothing left to
            // do but send plain text.
            None => {
                let body = "internal server error";
                Response::build()
                    .status(Status::InternalServerError)
                    .header(rocket::http::ContentType::Plain)
                    .sized_body(body.len(), std::io::Cursor::new(body))
                    .ok()
            }
        }
    }
}
