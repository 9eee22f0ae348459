//! The semantic mapper (C3, `spec.md` §4.3): the only place that knows how
//! typed fields fold into the positional `v0..v5` rule tuple and back.
//!
//! `ptype = "p"` (a policy rule) uses the five matcher slots: subject,
//! object, action, domain, effect. `ptype = "g"` (a role relation) uses
//! only three: child subject, parent role, domain — `action`/`effect` are
//! not defined for `g` rows and `to_dto` always reports them as `None`,
//! which is what makes the round-trip property in `spec.md` §8 hold:
//! `to_dto(to_positional(dto)) == dto` restricted to the fields defined
//! for that row's `ptype`.

use super::dto::PolicyRuleDto;
use super::rule::{NewRuleTuple, PType, RuleTuple};

pub fn to_positional(dto: PolicyRuleDto) -> NewRuleTuple {
    match dto.ptype {
        PType::P => NewRuleTuple {
            ptype: PType::P,
            v0: dto.subject,
            v1: dto.object,
            v2: dto.action,
            v3: dto.domain,
            v4: dto.effect,
            v5: dto.v5,
        },
        PType::G => NewRuleTuple {
            ptype: PType::G,
            v0: dto.subject,
            v1: dto.object,
            v2: dto.domain,
            v3: dto.v4,
            v4: dto.v5,
            v5: None,
        },
    }
}

pub fn to_dto(rule: RuleTuple) -> PolicyRuleDto {
    match rule.ptype {
        PType::P => PolicyRuleDto {
            id: Some(rule.id),
            ptype: PType::P,
            subject: rule.v0,
            object: rule.v1,
            action: rule.v2,
            domain: rule.v3,
            effect: rule.v4,
            v4: None,
            v5: rule.v5,
        },
        PType::G => PolicyRuleDto {
            id: Some(rule.id),
            ptype: PType::G,
            subject: rule.v0,
            object: rule.v1,
            action: None,
            domain: rule.v2,
            effect: None,
            v4: rule.v3,
            v5: rule.v4,
        },
    }
}
