pub mod attendance_record;
pub mod enrollment_record;
pub mod score_record;
