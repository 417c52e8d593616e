pub mod command;
pub mod error;
pub mod resolve;
pub mod telegram;

pub use self::telegram::Reactor;

use crate::{
    prelude::*,
    telegram::{Telegram, methods::{Method, SetMyCommands}, objects::BotCommand},
};

/// Register the command list with Telegram.
#[instrument(skip_all)]
pub async fn try_init(telegram: &Telegram) -> Result {
    let commands = vec![
        BotCommand::builder().command("so").description("查询附近的地点，例如 /so 咖啡馆").build(),
        BotCommand::builder()
            .command("go")
            .description("查询距离和预计时间：/go <终点> 或 /go <起点> to <终点>")
            .build(),
        BotCommand::builder()
            .command("dd")
            .description("查询路况：/dd <终点> 或 /dd <起点> to <终点>")
            .build(),
        BotCommand::builder().command("setlocation").description("设置常用位置").build(),
    ];
    SetMyCommands { commands }
        .call_on(telegram)
        .await
        .context("failed to register the bot commands")?;
    Ok(())
}
