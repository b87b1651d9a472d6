mod notices;
mod top_bar;
