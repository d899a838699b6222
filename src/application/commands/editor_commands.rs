//! Editor Commands - 编辑器中的 AI 辅助操作
//!
//! 结果只返回给调用方，不写入会话

/// 润色正文
#[derive(Debug, Clone)]
pub struct RefineTextCommand {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct RefineTextResponse {
    pub text: String,
    /// 文本是否被改动
    pub changed: bool,
}

/// 为正文生成插图
#[derive(Debug, Clone)]
pub struct IllustrateStoryCommand {
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct IllustrateStoryResponse {
    pub image_url: Option<String>,
}
