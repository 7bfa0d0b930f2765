//! The closed set of ~50 AWS-resource recognizers. Regex bodies and
//! replacement templates mirror the reference implementation's
//! `cloud_patterns.py` pattern-for-pattern; see SPEC_FULL.md §4.1 for the
//! full table and priority-band rationale.

use regex::Regex;

use super::validators;
use super::Pattern;

macro_rules! pattern {
    ($name:literal, $regex:literal, $replacement:literal, $type_tag:literal, $priority:literal) => {
        Pattern {
            name: $name,
            regex: Regex::new($regex).expect("pattern catalog regex must compile"),
            priority: $priority,
            type_tag: $type_tag,
            replacement_template: $replacement,
            validator: None,
        }
    };
    ($name:literal, $regex:literal, $replacement:literal, $type_tag:literal, $priority:literal, $validator:expr) => {
        Pattern {
            name: $name,
            regex: Regex::new($regex).expect("pattern catalog regex must compile"),
            priority: $priority,
            type_tag: $type_tag,
            replacement_template: $replacement,
            validator: Some($validator),
        }
    };
}

pub fn patterns() -> Vec<Pattern> {
    vec![
        // Priority 50-99: narrow, high-confidence ARNs.
        pattern!(
            "fargate_task",
            r"arn:aws:ecs:[a-z0-9\-]+:\d+:task/[a-zA-Z0-9\-_]+/[a-zA-Z0-9\-]{36}",
            "AWS_FARGATE_TASK_{:03d}",
            "fargate",
            50
        ),
        pattern!(
            "ssm_session",
            r"s-[a-f0-9]{17}",
            "AWS_SSM_SESSION_{:03d}",
            "ssm_session",
            60
        ),
        pattern!(
            "insights_query",
            r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
            "AWS_INSIGHTS_QUERY_{:03d}",
            "insights",
            75,
            validators::insights_query_id
        ),
        pattern!(
            "apprunner_service",
            r"arn:aws:apprunner:[a-z0-9\-]+:\d+:service/[a-zA-Z0-9\-_]+/[a-zA-Z0-9]{16,32}",
            "AWS_APPRUNNER_{:03d}",
            "apprunner",
            85
        ),
        pattern!(
            "eventbridge_bus",
            r"arn:aws:events:[a-z0-9\-]+:\d+:event-bus/[a-zA-Z0-9\-_.]+",
            "AWS_EVENTBUS_{:03d}",
            "eventbridge",
            95
        ),
        // Priority 100-199: specific ARNs.
        pattern!(
            "lambda_arn",
            r"arn:aws:lambda:[a-z0-9\-]+:\d+:function:[a-zA-Z0-9\-_]+",
            "AWS_LAMBDA_ARN_{:03d}",
            "lambda",
            100
        ),
        pattern!(
            "ecs_task",
            r"arn:aws:ecs:[a-z0-9\-]+:\d+:task-definition/[a-zA-Z0-9\-_]+:[0-9]+",
            "AWS_ECS_TASK_{:03d}",
            "ecs",
            105
        ),
        pattern!(
            "elb_arn",
            r"arn:aws:elasticloadbalancing:[a-z0-9\-]+:\d+:loadbalancer/[a-zA-Z0-9\-/]+",
            "AWS_ELB_ARN_{:03d}",
            "elb",
            110
        ),
        pattern!(
            "iam_role",
            r"arn:aws:iam::\d+:role/[a-zA-Z0-9\-_+=,.@]+",
            "AWS_IAM_ROLE_{:03d}",
            "iam_role",
            115
        ),
        pattern!(
            "iam_user",
            r"arn:aws:iam::\d+:user/[a-zA-Z0-9\-_+=,.@]+",
            "AWS_IAM_USER_{:03d}",
            "iam_user",
            120
        ),
        pattern!(
            "sns_topic",
            r"arn:aws:sns:[a-z0-9\-]+:\d+:[a-zA-Z0-9\-_]+",
            "AWS_SNS_TOPIC_{:03d}",
            "sns",
            125
        ),
        pattern!(
            "cert_arn",
            r"arn:aws:acm:[a-z0-9\-]+:\d+:certificate/[a-f0-9\-]+",
            "AWS_CERT_ARN_{:03d}",
            "certificate",
            130
        ),
        pattern!(
            "secret_arn",
            r"arn:aws:secretsmanager:[a-z0-9\-]+:\d+:secret:[a-zA-Z0-9\-_/]+-[a-zA-Z0-9]+",
            "AWS_SECRET_ARN_{:03d}",
            "secret",
            135
        ),
        pattern!(
            "sqs_queue",
            r"https://sqs\.[a-z0-9\-]+\.amazonaws\.com/\d+/[a-zA-Z0-9\-_]+",
            "AWS_SQS_QUEUE_{:03d}",
            "sqs",
            140
        ),
        pattern!(
            "dynamodb_table",
            r"arn:aws:dynamodb:[a-z0-9\-]+:\d+:table/[a-zA-Z0-9\-_.]+",
            "AWS_DYNAMODB_TABLE_{:03d}",
            "dynamodb",
            145
        ),
        pattern!(
            "kinesis_stream",
            r"arn:aws:kinesis:[a-z0-9\-]+:\d+:stream/[a-zA-Z0-9\-_.]+",
            "AWS_KINESIS_{:03d}",
            "kinesis",
            150
        ),
        pattern!(
            "stepfunctions_arn",
            r"arn:aws:states:[a-z0-9\-]+:\d+:stateMachine:[a-zA-Z0-9\-_]+",
            "AWS_STEP_FN_{:03d}",
            "stepfunctions",
            155
        ),
        pattern!(
            "batch_job",
            r"arn:aws:batch:[a-z0-9\-]+:\d+:job-queue/[a-zA-Z0-9\-_]+",
            "AWS_BATCH_QUEUE_{:03d}",
            "batch",
            160
        ),
        pattern!(
            "glue_job",
            r"arn:aws:glue:[a-z0-9\-]+:\d+:job/[a-zA-Z0-9\-_]+",
            "AWS_GLUE_JOB_{:03d}",
            "glue",
            165
        ),
        pattern!(
            "sagemaker_endpoint",
            r"arn:aws:sagemaker:[a-z0-9\-]+:\d+:endpoint/[a-zA-Z0-9\-_]+",
            "AWS_SAGEMAKER_{:03d}",
            "sagemaker",
            170
        ),
        pattern!(
            "athena_workgroup",
            r"arn:aws:athena:[a-z0-9\-]+:\d+:workgroup/[a-zA-Z0-9\-_]+",
            "AWS_ATHENA_{:03d}",
            "athena",
            175
        ),
        pattern!(
            "codecommit_repo",
            r"arn:aws:codecommit:[a-z0-9\-]+:\d+:repository/[a-zA-Z0-9\-_]+",
            "AWS_CODECOMMIT_{:03d}",
            "codecommit",
            180
        ),
        pattern!(
            "log_group",
            r"arn:aws:logs:[a-z0-9\-]+:\d+:log-group:[a-zA-Z0-9\-_/]+",
            "AWS_LOG_GROUP_{:03d}",
            "logs",
            185
        ),
        pattern!(
            "cloudformation_stack",
            r"arn:aws:cloudformation:[a-z0-9\-]+:\d+:stack/[a-zA-Z0-9\-_]+/[a-f0-9\-]+",
            "AWS_CLOUDFORMATION_STACK_{:03d}",
            "cloudformation",
            190
        ),
        // Priority 200-299: resource ids.
        pattern!(
            "nat_gateway",
            r"nat-[0-9a-f]{17}",
            "AWS_NAT_GW_{:03d}",
            "nat",
            200
        ),
        pattern!(
            "ebs_volume",
            r"vol-[0-9a-f]{17}",
            "AWS_EBS_VOL_{:03d}",
            "ebs",
            210
        ),
        pattern!(
            "subnet",
            r"subnet-[0-9a-f]{17}",
            "AWS_SUBNET_{:03d}",
            "subnet",
            220
        ),
        pattern!("vpc", r"vpc-[0-9a-f]{8}", "AWS_VPC_{:03d}", "vpc", 230),
        pattern!(
            "security_group",
            r"sg-[0-9a-f]{17}",
            "AWS_SECURITY_GROUP_{:03d}",
            "security_group",
            240
        ),
        pattern!(
            "ami_id",
            r"ami-[0-9a-f]{17}",
            "AWS_AMI_{:03d}",
            "ami",
            250
        ),
        pattern!(
            "ec2_instance",
            r"i-[0-9a-f]{17}",
            "AWS_EC2_{:03d}",
            "ec2",
            260
        ),
        pattern!(
            "snapshot",
            r"snap-[0-9a-f]{17}",
            "AWS_SNAPSHOT_{:03d}",
            "snapshot",
            270
        ),
        pattern!(
            "internet_gateway",
            r"igw-[0-9a-f]{17}",
            "AWS_IGW_{:03d}",
            "igw",
            280
        ),
        pattern!(
            "efs_filesystem",
            r"fs-[0-9a-f]{17}",
            "AWS_EFS_{:03d}",
            "efs",
            290
        ),
        // Priority 300-399: network/api resources.
        pattern!(
            "rds_instance",
            r"[a-z][a-z0-9\-]*db[a-z0-9\-]*-[a-z0-9]{7}",
            "AWS_RDS_{:03d}",
            "rds",
            300
        ),
        pattern!(
            "elasticache_cluster",
            r"[a-z][a-z0-9\-]*-cluster-[0-9]{3}",
            "AWS_ELASTICACHE_{:03d}",
            "elasticache",
            310
        ),
        pattern!(
            "api_gateway",
            r"https://[a-z0-9]{10}\.execute-api\.[a-z0-9\-]+\.amazonaws\.com(?:/[a-zA-Z0-9\-_]+)?",
            "AWS_API_GW_{:03d}",
            "api_gateway",
            320
        ),
        pattern!(
            "redshift_cluster",
            r"[a-z][a-z0-9\-]*-cluster",
            "AWS_REDSHIFT_{:03d}",
            "redshift",
            320
        ),
        pattern!(
            "transit_gateway",
            r"tgw-[0-9a-f]{17}",
            "AWS_TGW_{:03d}",
            "tgw",
            330
        ),
        pattern!(
            "access_key",
            r"AKIA[0-9A-Z]{16}",
            "AWS_ACCESS_KEY_{:03d}",
            "access_key",
            350
        ),
        pattern!(
            "route53_zone",
            r"Z[0-9A-Z]{13,}",
            "AWS_ROUTE53_ZONE_{:03d}",
            "route53",
            360
        ),
        pattern!(
            "kms_key",
            r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
            "AWS_KMS_KEY_{:03d}",
            "kms",
            370
        ),
        pattern!(
            "ssm_parameter",
            r"/[a-zA-Z0-9\-_/]+",
            "AWS_SSM_PARAM_{:03d}",
            "ssm_parameter",
            380
        ),
        pattern!(
            "cloudwatch_log",
            r"/aws/[a-zA-Z0-9\-_/]+",
            "AWS_LOG_GROUP_{:03d}",
            "cloudwatch",
            390
        ),
        pattern!(
            "s3_bucket_logs",
            r"[a-z0-9][a-z0-9\-]*logs[a-z0-9\-]*-[0-9]+",
            "AWS_S3_LOGS_BUCKET_{:03d}",
            "s3_logs",
            395
        ),
        pattern!(
            "cloudtrail_arn",
            r"arn:aws:cloudtrail:[a-z0-9\-]+:\d+:trail/[a-zA-Z0-9\-_]+",
            "AWS_CLOUDTRAIL_{:03d}",
            "cloudtrail",
            399
        ),
        // Priority 400-499: IP addressing.
        pattern!(
            "public_ip",
            r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b",
            "AWS_PUBLIC_IP_{:03d}",
            "public_ip",
            460,
            validators::public_ip
        ),
        pattern!(
            "ipv6",
            r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b",
            "AWS_IPV6_{:03d}",
            "ipv6",
            470
        ),
        pattern!(
            "elastic_ip",
            r"eipalloc-[0-9a-f]{17}",
            "AWS_ELASTIC_IP_{:03d}",
            "elastic_ip",
            480
        ),
        pattern!(
            "cloudfront",
            r"[a-z0-9]{13,14}\.cloudfront\.net",
            "AWS_CLOUDFRONT_DOMAIN_{:03d}",
            "cloudfront",
            490
        ),
        // Priority 500-699: broad fallbacks, shadowed by specific patterns
        // above via the longest-match-wins conflict resolver.
        pattern!(
            "arn",
            r"arn:aws:[a-z0-9\-]+:[a-z0-9\-]*:[0-9]*:[a-zA-Z0-9\-/:*]+",
            "AWS_ARN_{:03d}",
            "arn",
            500
        ),
        pattern!(
            "s3_bucket",
            r"[a-z0-9][a-z0-9\-.]{1,61}[a-z0-9](?:-bucket|-storage|-backup|-logs|-data|-config)\b",
            "AWS_S3_BUCKET_{:03d}",
            "s3",
            500
        ),
        pattern!(
            "account_id",
            r"\b\d{12}\b",
            "AWS_ACCOUNT_{:03d}",
            "account",
            600,
            validators::account_id
        ),
        pattern!(
            "session_token",
            r"(?:AQoEXAMPLE|FwoGZXIvYXdzE)[A-Za-z0-9/+=]{50,}",
            "AWS_SESSION_TOKEN_{:03d}",
            "session_token",
            610
        ),
        pattern!(
            "secret_key",
            r"[A-Za-z0-9/+=]{40}",
            "AWS_SECRET_KEY_{:03d}",
            "secret_key",
            620
        ),
        pattern!(
            "cloudfront_distribution",
            r"E[0-9A-Z]{13}",
            "AWS_CLOUDFRONT_DIST_{:03d}",
            "cloudfront_distribution",
            650
        ),
    ]
}
