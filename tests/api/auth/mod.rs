mod logout;
mod status;
