//! End-to-end enrollment and notification scenarios against the public API.

use chrono::NaiveDateTime;

use gym_management::domain::catalog::{ForumPolicy, SessionKind};
use gym_management::domain::enrollment::{EnrollmentOutcome, RejectionReason};
use gym_management::domain::foundation::{parse_schedule, PersonId, SessionId};
use gym_management::domain::gym::{Gym, GymError};
use gym_management::domain::people::{Gender, Person, Secretary};

const FUTURE: &str = "23-01-2030 10:00";

fn now() -> NaiveDateTime {
    parse_schedule("01-06-2025 12:00").unwrap()
}

struct Facility {
    gym: Gym,
    secretary: Secretary,
    coach: PersonId,
}

impl Facility {
    fn open() -> Self {
        let mut gym = Gym::new("Scenario Gym", 0);
        let secretary = gym.appoint_secretary(
            Person::new("Rina", 0, Gender::Female, "12-03-1980").unwrap(),
            4000,
        );
        let coach = secretary
            .hire_instructor(
                &mut gym,
                Person::new("Omer", 0, Gender::Male, "1975-07-07").unwrap(),
                70,
                SessionKind::ALL.to_vec(),
            )
            .unwrap();
        Self {
            gym,
            secretary,
            coach,
        }
    }

    fn client(&mut self, balance: i64, gender: Gender, birth: &str) -> PersonId {
        let person = Person::new("Client", balance, gender, birth).unwrap();
        self.secretary
            .register_client(&mut self.gym, person, now().date())
            .unwrap()
    }

    fn session(&mut self, kind: SessionKind, schedule: &str, forum: ForumPolicy) -> SessionId {
        self.secretary
            .schedule_session(&mut self.gym, kind, schedule, forum, self.coach)
            .unwrap()
            .session_id()
    }

    fn enroll(&mut self, client: PersonId, session: SessionId) -> EnrollmentOutcome {
        self.secretary
            .register_client_to_session(&mut self.gym, client, session, now())
            .unwrap()
    }

    fn balance_of(&self, client: PersonId) -> i64 {
        self.gym.client(client).unwrap().balance().amount()
    }
}

#[test]
fn pilates_enrollment_moves_the_price_into_the_facility() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let client = f.client(100, Gender::Female, "2005-01-01");
    let before = f.gym.balance();

    assert_eq!(f.enroll(client, session), EnrollmentOutcome::Enrolled);
    assert_eq!(f.balance_of(client), 40);
    assert_eq!(f.gym.balance(), before + 60);
    assert_eq!(f.gym.session(session).unwrap().roster(), [client]);
}

#[test]
fn short_balance_leaves_everything_untouched() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let client = f.client(50, Gender::Female, "2005-01-01");
    let before = f.gym.balance();

    assert_eq!(
        f.enroll(client, session),
        EnrollmentOutcome::Rejected(RejectionReason::InsufficientFunds)
    );
    assert_eq!(f.balance_of(client), 50);
    assert_eq!(f.gym.balance(), before);
    assert!(f.gym.session(session).unwrap().roster().is_empty());
    assert_eq!(
        f.gym.action_log().last(),
        Some("Failed registration: Client doesn't have enough balance")
    );
}

#[test]
fn exact_balance_is_enough() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Ninja, FUTURE, ForumPolicy::Open);
    let client = f.client(150, Gender::Male, "2000-02-02");

    assert!(f.enroll(client, session).is_enrolled());
    assert_eq!(f.balance_of(client), 0);
}

#[test]
fn seniors_session_refuses_a_forty_year_old() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::MachinePilates, FUTURE, ForumPolicy::Seniors);
    let client = f.client(500, Gender::Male, "1985-01-01");

    assert_eq!(
        f.enroll(client, session),
        EnrollmentOutcome::Rejected(RejectionReason::ForumIneligible)
    );
}

#[test]
fn full_pilates_session_turns_away_an_eligible_client() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    for _ in 0..30 {
        let client = f.client(60, Gender::Female, "1999-09-09");
        assert!(f.enroll(client, session).is_enrolled());
    }
    let late = f.client(1000, Gender::Female, "1999-09-09");

    assert_eq!(
        f.enroll(late, session),
        EnrollmentOutcome::Rejected(RejectionReason::SessionFull)
    );
    assert_eq!(f.gym.session(session).unwrap().roster().len(), 30);
    assert_eq!(f.balance_of(late), 1000);
}

#[test]
fn already_enrolled_wins_over_every_other_failure() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Ninja, FUTURE, ForumPolicy::MaleOnly);
    let client = f.client(150, Gender::Male, "1990-01-01");
    assert!(f.enroll(client, session).is_enrolled());
    for _ in 0..4 {
        let other = f.client(150, Gender::Male, "1990-01-01");
        assert!(f.enroll(other, session).is_enrolled());
    }

    // Now full, and the client is broke.
    assert_eq!(
        f.enroll(client, session),
        EnrollmentOutcome::Rejected(RejectionReason::AlreadyEnrolled)
    );
}

#[test]
fn date_notification_reaches_each_participant_once() {
    let mut f = Facility::open();
    let morning = f.session(SessionKind::Pilates, "15-03-2030 08:00", ForumPolicy::Open);
    let evening = f.session(SessionKind::ThaiBoxing, "15-03-2030 20:00", ForumPolicy::Open);
    let elsewhere = f.session(SessionKind::Pilates, "16-03-2030 08:00", ForumPolicy::Open);
    let both = f.client(1000, Gender::Female, "1990-01-01");
    let other_day = f.client(1000, Gender::Male, "1990-01-01");
    f.enroll(both, morning);
    f.enroll(both, evening);
    f.enroll(other_day, elsewhere);

    let delivered = f
        .secretary
        .notify_date(&mut f.gym, "15-03-2030", "Bring water")
        .unwrap();
    let again = f
        .secretary
        .notify_date(&mut f.gym, "15-03-2030", "Bring water")
        .unwrap();

    assert_eq!(delivered, 1);
    assert_eq!(again, 0);
    assert_eq!(f.gym.client(both).unwrap().notifications(), ["Bring water"]);
    assert!(f.gym.client(other_day).unwrap().notifications().is_empty());
}

#[test]
fn session_notification_allows_repeats() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let client = f.client(100, Gender::Female, "1990-01-01");
    f.enroll(client, session);

    f.secretary
        .notify_session(&mut f.gym, session, "Moved to hall B")
        .unwrap();
    f.secretary
        .notify_session(&mut f.gym, session, "Moved to hall B")
        .unwrap();

    assert_eq!(f.gym.client(client).unwrap().notifications().len(), 2);
}

#[test]
fn unregistering_twice_fails_the_second_time() {
    let mut f = Facility::open();
    let first = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let second = f.session(SessionKind::ThaiBoxing, FUTURE, ForumPolicy::Open);
    let client = f.client(500, Gender::Female, "1990-01-01");
    f.enroll(client, first);
    f.enroll(client, second);
    let facility_balance = f.gym.balance();

    let left = f.secretary.unregister_client(&mut f.gym, client).unwrap();

    assert_eq!(left.sessions_left.len(), 2);
    assert!(!f.gym.is_registered(client));
    assert!(f.gym.sessions().iter().all(|s| !s.has_participant(client)));
    assert_eq!(f.gym.balance(), facility_balance);
    assert_eq!(
        f.secretary.unregister_client(&mut f.gym, client).unwrap_err(),
        GymError::client_not_registered(client)
    );
}

#[test]
fn replaced_secretary_is_locked_out_everywhere() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let client = f.client(100, Gender::Female, "1990-01-01");
    let stale = f.secretary.clone();
    let current = f
        .gym
        .appoint_secretary(Person::new("Noa", 0, Gender::Female, "1988-08-08").unwrap(), 4100);

    let inactive = GymError::administrator_inactive(stale.id());
    assert_eq!(
        stale
            .register_client_to_session(&mut f.gym, client, session, now())
            .unwrap_err(),
        inactive
    );
    assert_eq!(stale.notify_all(&mut f.gym, "hello").unwrap_err(), inactive);
    assert_eq!(stale.pay_salaries(&mut f.gym).unwrap_err(), inactive);
    assert_eq!(stale.action_log(&f.gym).unwrap_err(), inactive);

    assert!(current
        .register_client_to_session(&mut f.gym, client, session, now())
        .unwrap()
        .is_enrolled());
}

#[test]
fn scheduling_the_same_session_twice_reuses_it() {
    let mut f = Facility::open();
    let coach = f.coach;
    let first = f
        .secretary
        .schedule_session(&mut f.gym, SessionKind::Pilates, FUTURE, ForumPolicy::Open, coach)
        .unwrap();
    let entries = f.gym.action_log().len();
    let second = f
        .secretary
        .schedule_session(&mut f.gym, SessionKind::Pilates, FUTURE, ForumPolicy::Open, coach)
        .unwrap();

    assert!(first.is_new());
    assert!(!second.is_new());
    assert_eq!(first.session_id(), second.session_id());
    assert_eq!(f.gym.sessions().len(), 1);
    assert_eq!(f.gym.action_log().len(), entries);
}

#[test]
fn underage_registration_is_refused() {
    let mut f = Facility::open();
    let teen = Person::new("Teen", 100, Gender::Male, "2010-01-01").unwrap();

    let err = f
        .secretary
        .register_client(&mut f.gym, teen, now().date())
        .unwrap_err();

    assert!(matches!(err, GymError::InvalidAge { minimum: 18, .. }));
    assert!(f.gym.clients().is_empty());
}

#[test]
fn payroll_comes_out_of_the_facility_balance() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let client = f.client(100, Gender::Female, "1990-01-01");
    f.enroll(client, session);

    let payroll = f.secretary.pay_salaries(&mut f.gym).unwrap();

    assert_eq!(payroll.total(), 4000 + 70);
    assert_eq!(f.gym.balance(), 60 - 4070);
    assert_eq!(f.secretary.balance().amount(), 4000);
    assert_eq!(f.gym.secretary().unwrap().balance().amount(), 4000);
    assert_eq!(
        f.gym.action_log().last(),
        Some("Salaries have been paid to all employees")
    );
}

#[test]
fn salary_shows_on_every_copy_of_the_secretary_handle() {
    let mut f = Facility::open();
    let copy = f.secretary.clone();

    f.secretary.pay_salaries(&mut f.gym).unwrap();
    copy.pay_salaries(&mut f.gym).unwrap();

    assert_eq!(f.secretary.balance().amount(), 8000);
    assert_eq!(copy.balance().amount(), 8000);
    assert!(f.gym.to_string().contains("Balance: 8000 | Role: Secretary"));
}

#[test]
fn retired_secretary_cannot_touch_rosters_or_mailboxes() {
    let mut f = Facility::open();
    let session = f.session(SessionKind::Pilates, FUTURE, ForumPolicy::Open);
    let client = f.client(100, Gender::Female, "1990-01-01");
    let old = f.secretary.clone();
    f.gym
        .appoint_secretary(Person::new("New", 0, Gender::Male, "1985-05-05").unwrap(), 4000);
    let log_len = f.gym.action_log().len();

    let inactive = GymError::administrator_inactive(old.id());
    assert_eq!(
        old.register_client_to_session(&mut f.gym, client, session, now())
            .unwrap_err(),
        inactive
    );
    assert_eq!(old.unregister_client(&mut f.gym, client).unwrap_err(), inactive);
    assert_eq!(
        old.notify_session(&mut f.gym, session, "bypassed").unwrap_err(),
        inactive
    );
    assert_eq!(
        old.notify_date(&mut f.gym, "23-01-2030", "bypassed").unwrap_err(),
        inactive
    );
    assert_eq!(old.notify_all(&mut f.gym, "bypassed").unwrap_err(), inactive);

    assert!(f.gym.session(session).unwrap().roster().is_empty());
    assert!(f.gym.is_registered(client));
    assert_eq!(f.balance_of(client), 100);
    assert!(f.gym.client(client).unwrap().notifications().is_empty());
    assert_eq!(f.gym.action_log().len(), log_len);
}
