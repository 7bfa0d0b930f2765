mod health_check;
mod messages;
mod support;
