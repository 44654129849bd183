use super::Arena;
use crate::dto::PlayRequest;
use crate::dto::PlayResponse;
use crate::gameplay::Hand;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use futures::StreamExt;

/// Largest `/game` body read before the request is treated as unreadable.
const MAX_BODY: usize = 4096;

/// Plays one round. Always 200: bodies that cannot be read or decoded
/// come back as an UNKNOWN result instead of an error status.
pub async fn play(arena: web::Data<Arena>, body: web::Payload) -> impl Responder {
    let hand = match read(body).await {
        Some(bytes) => PlayRequest::decode(&bytes),
        None => Hand::unknown(),
    };
    HttpResponse::Ok().json(PlayResponse::from(&arena.play(&hand)))
}

pub async fn score(arena: web::Data<Arena>) -> impl Responder {
    match arena.score() {
        Some(score) => HttpResponse::Ok().json(score),
        None => HttpResponse::NotFound().body("scoring disabled"),
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn read(mut body: web::Payload) -> Option<web::Bytes> {
    let mut bytes = web::BytesMut::new();
    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(chunk) if bytes.len() + chunk.len() <= MAX_BODY => bytes.extend_from_slice(&chunk),
            Ok(_) => {
                log::debug!("play request over {} bytes", MAX_BODY);
                return None;
            }
            Err(e) => {
                log::debug!("unreadable play request: {}", e);
                return None;
            }
        }
    }
    Some(bytes.freeze())
}
