//! Static mock records served by the API.

use chrono::NaiveDate;

use crate::ids::{CouncilId, IncidentId, ReferralId, RegionId, SchoolId, StudentId};
use crate::incidents::{Incident, IncidentSeverity};
use crate::referrals::{Referral, ReferralStatus};
use crate::schools::{Council, Region, School};
use crate::students::Student;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn regions() -> Vec<Region> {
    vec![
        Region {
            id: RegionId::new("reg-norte"),
            name: "Região Norte".to_string(),
        },
        Region {
            id: RegionId::new("reg-sul"),
            name: "Região Sul".to_string(),
        },
    ]
}

pub fn councils() -> Vec<Council> {
    vec![
        Council {
            id: CouncilId::new("ct-001"),
            name: "Conselho Tutelar Norte".to_string(),
            region_id: RegionId::new("reg-norte"),
            phone: "(48) 3333-1001".to_string(),
        },
        Council {
            id: CouncilId::new("ct-002"),
            name: "Conselho Tutelar Sul".to_string(),
            region_id: RegionId::new("reg-sul"),
            phone: "(48) 3333-2002".to_string(),
        },
    ]
}

pub fn schools() -> Vec<School> {
    vec![
        School {
            id: SchoolId::new("esc-001"),
            name: "Escola Municipal Esperança".to_string(),
            address: "Rua das Flores, 120".to_string(),
            region_id: RegionId::new("reg-norte"),
            council_id: CouncilId::new("ct-001"),
            student_count: 412,
        },
        School {
            id: SchoolId::new("esc-002"),
            name: "Escola Estadual Monteiro Lobato".to_string(),
            address: "Av. Brasil, 455".to_string(),
            region_id: RegionId::new("reg-norte"),
            council_id: CouncilId::new("ct-001"),
            student_count: 638,
        },
        School {
            id: SchoolId::new("esc-003"),
            name: "Escola Municipal Cecília Meireles".to_string(),
            address: "Rua XV de Novembro, 78".to_string(),
            region_id: RegionId::new("reg-sul"),
            council_id: CouncilId::new("ct-002"),
            student_count: 297,
        },
    ]
}

pub fn students() -> Vec<Student> {
    let student = |id: &str,
                   name: &str,
                   school: &str,
                   grade: &str,
                   born: NaiveDate,
                   guardian: &str,
                   attendance: u8| Student {
        id: StudentId::new(id),
        name: name.to_string(),
        school_id: SchoolId::new(school),
        grade: grade.to_string(),
        birth_date: born,
        guardian_name: guardian.to_string(),
        attendance_rate: attendance,
        at_risk: attendance < 75,
    };

    vec![
        student(
            "est-001",
            "João Pereira",
            "esc-001",
            "5º ano",
            date(2014, 3, 2),
            "Carla Pereira",
            92,
        ),
        student(
            "est-002",
            "Ana Lima",
            "esc-001",
            "7º ano",
            date(2012, 8, 19),
            "Roberto Lima",
            68,
        ),
        student(
            "est-003",
            "Lucas Santos",
            "esc-002",
            "9º ano",
            date(2010, 11, 5),
            "Marta Santos",
            71,
        ),
        student(
            "est-004",
            "Beatriz Costa",
            "esc-002",
            "6º ano",
            date(2013, 1, 27),
            "Paulo Costa",
            96,
        ),
        student(
            "est-005",
            "Pedro Almeida",
            "esc-003",
            "8º ano",
            date(2011, 6, 14),
            "Sandra Almeida",
            58,
        ),
    ]
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: IncidentId::new("inc-001"),
            school_id: SchoolId::new("esc-001"),
            student_id: Some(StudentId::new("est-002")),
            kind: "evasão".to_string(),
            description: "Aluna ausente há 12 dias consecutivos".to_string(),
            severity: IncidentSeverity::High,
            occurred_on: date(2024, 3, 12),
            reported_by: "Escola Municipal Esperança".to_string(),
        },
        Incident {
            id: IncidentId::new("inc-002"),
            school_id: SchoolId::new("esc-001"),
            student_id: Some(StudentId::new("est-001")),
            kind: "conflito".to_string(),
            description: "Discussão durante o recreio".to_string(),
            severity: IncidentSeverity::Low,
            occurred_on: date(2024, 4, 3),
            reported_by: "Maria Souza".to_string(),
        },
        Incident {
            id: IncidentId::new("inc-003"),
            school_id: SchoolId::new("esc-002"),
            student_id: Some(StudentId::new("est-003")),
            kind: "violência".to_string(),
            description: "Sinais de agressão relatados pela professora".to_string(),
            severity: IncidentSeverity::High,
            occurred_on: date(2024, 4, 18),
            reported_by: "Escola Estadual Monteiro Lobato".to_string(),
        },
        Incident {
            id: IncidentId::new("inc-004"),
            school_id: SchoolId::new("esc-003"),
            student_id: Some(StudentId::new("est-005")),
            kind: "evasão".to_string(),
            description: "Frequência abaixo de 60% no bimestre".to_string(),
            severity: IncidentSeverity::Medium,
            occurred_on: date(2024, 5, 6),
            reported_by: "Escola Municipal Cecília Meireles".to_string(),
        },
    ]
}

pub fn referrals() -> Vec<Referral> {
    vec![
        Referral {
            id: ReferralId::new("enc-001"),
            student_id: StudentId::new("est-002"),
            school_id: SchoolId::new("esc-001"),
            council_id: CouncilId::new("ct-001"),
            reason: "Infrequência escolar".to_string(),
            status: ReferralStatus::InProgress,
            created_on: date(2024, 3, 20),
        },
        Referral {
            id: ReferralId::new("enc-002"),
            student_id: StudentId::new("est-003"),
            school_id: SchoolId::new("esc-002"),
            council_id: CouncilId::new("ct-001"),
            reason: "Suspeita de violência doméstica".to_string(),
            status: ReferralStatus::Pending,
            created_on: date(2024, 4, 19),
        },
        Referral {
            id: ReferralId::new("enc-003"),
            student_id: StudentId::new("est-005"),
            school_id: SchoolId::new("esc-003"),
            council_id: CouncilId::new("ct-002"),
            reason: "Infrequência escolar".to_string(),
            status: ReferralStatus::Resolved,
            created_on: date(2024, 5, 10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_reference_known_schools() {
        let school_ids: Vec<_> = schools().into_iter().map(|s| s.id).collect();
        assert!(students().iter().all(|s| school_ids.contains(&s.school_id)));
        assert!(incidents().iter().all(|i| school_ids.contains(&i.school_id)));
        assert!(referrals().iter().all(|r| school_ids.contains(&r.school_id)));
    }

    #[test]
    fn test_at_risk_follows_attendance() {
        for student in students() {
            assert_eq!(student.at_risk, student.attendance_rate < 75);
        }
    }
}
