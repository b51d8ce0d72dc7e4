mod guard;
mod run;
