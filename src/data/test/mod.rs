mod comment;
mod engagement;
mod subscription;
mod user;
mod video;
