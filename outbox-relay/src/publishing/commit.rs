//! 提交阶段调度门面（CommitScheduler）
//!
//! 将“提交后执行”的回调抽象为一等任务值（boxed future），
//! 由调用方注入具体的延迟执行机制：真实事务管理器的提交钩子、
//! 或无事务场景下的立即执行实现。
//!
use futures_core::future::BoxFuture;

/// 提交阶段任务：一段 `'static` 生命周期的延迟执行逻辑
pub type CommitTask = BoxFuture<'static, ()>;

/// 提交阶段调度器
///
/// 约定：
/// - 若调用方处于事务上下文中，任务在该事务提交成功后恰好执行一次，
///   回滚时永不执行；
/// - 若不处于事务上下文中，任务立即执行；
/// - 编排器不感知也不假设当前处于哪种情形。
#[async_trait::async_trait]
pub trait CommitScheduler: Send + Sync {
    /// 注册一个提交后任务
    async fn after_commit(&self, task: CommitTask);
}
