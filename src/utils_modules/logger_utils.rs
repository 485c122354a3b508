use crate::common::*;

#[doc = r#"
    전역 로거를 설정하는 함수.

    flexi_logger 를 사용하여 stdout 과 `logs/` 디렉토리의 파일에 동시에 기록하며,
    일 단위로 회전하고 30개까지 보관한다. 로거 초기화는 프로그램 시작 시 한 번만
    수행되어야 한다.

    # Panics
    로그 스펙이 잘못되었거나 로거를 시작할 수 없는 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    let logger_handle = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[logger_utils->set_global_logger] Invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(log_format)
        .format_for_stdout(log_format)
        .start()
        .unwrap_or_else(|e| {
            panic!(
                "[logger_utils->set_global_logger] Failed to start logger: {:?}",
                e
            )
        });

    /* 핸들이 drop 되면 로거가 종료되므로 프로세스 수명 동안 유지한다 */
    std::mem::forget(logger_handle);
}

#[doc = "로그 한 줄의 공통 포맷"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}
